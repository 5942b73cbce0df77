use tracing::debug;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::{Config, Household, NULL_PIN_KEY, Tab, TabKind};
use crate::ops::columns::hide_column;
use crate::ops::filter::{apply_row_filter, set_filter_active, set_filter_inverted};
use crate::ops::magnitude::translate_pins;
use crate::ops::pins::{pin_summary, toggle_pin};
use crate::ops::rows::new_tab;
use crate::ops::viewport::compute_viewport;
use crate::util::unicode::display_width;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(
    command: Commands,
    json: bool,
    household: &Household,
    config: &Config,
    show_deleted: bool,
) -> CmdResult {
    match command {
        Commands::Layout(args) => cmd_layout(args, json, household, config, show_deleted),
        Commands::Tabs => cmd_tabs(json, household, show_deleted),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve a column by index or case-insensitive title
fn resolve_column(tab: &Tab, name: &str) -> Result<usize, String> {
    if let Ok(idx) = name.parse::<usize>() {
        if idx < tab.specs.len() {
            return Ok(idx);
        }
        return Err(format!(
            "column {} out of range ({} columns)",
            idx,
            tab.specs.len()
        ));
    }
    tab.specs
        .iter()
        .position(|s| s.title.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| format!("no column '{}' in {}", name, tab.kind.label()))
}

/// Split `COLUMN=VALUE`. `∅` stands for empty cells.
fn parse_pin(arg: &str) -> Result<(&str, &str), String> {
    let (col, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("pin '{}' should look like COLUMN=VALUE", arg))?;
    let value = if value.trim() == "∅" { NULL_PIN_KEY } else { value };
    Ok((col, value))
}

/// Build a tab and apply the layout options to it, in the order a user
/// would: hide, pin, then filter mode.
pub fn layout_tab(args: &LayoutArgs, household: &Household, show_deleted: bool) -> Result<Tab, String> {
    let mut tab = new_tab(args.tab, household, show_deleted);

    for name in &args.hide {
        let col = resolve_column(&tab, name)?;
        hide_column(&mut tab, col).map_err(|e| e.to_string())?;
    }
    for arg in &args.pin {
        let (name, value) = parse_pin(arg)?;
        let col = resolve_column(&tab, name)?;
        if tab.specs[col].is_hidden() {
            return Err(format!("column '{}' is hidden", tab.specs[col].title));
        }
        toggle_pin(&mut tab, col, value);
    }
    // Pin values arrive as raw cell text; bucket values pass through.
    if args.mag {
        translate_pins(&mut tab, true);
    }
    set_filter_active(&mut tab, args.filter);
    set_filter_inverted(&mut tab, args.invert);
    apply_row_filter(&mut tab, args.mag);

    if let Some(name) = &args.cursor {
        let col = resolve_column(&tab, name)?;
        if tab.specs[col].is_hidden() {
            return Err(format!("column '{}' is hidden", tab.specs[col].title));
        }
        tab.col_cursor = col;
    }
    Ok(tab)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_layout(
    args: LayoutArgs,
    json: bool,
    household: &Household,
    config: &Config,
    show_deleted: bool,
) -> CmdResult {
    let tab = layout_tab(&args, household, show_deleted)?;
    let sep_width = display_width(&config.ui.separator);
    let vp = compute_viewport(&tab, args.width, sep_width, args.mag);
    debug!(tab = args.tab.label(), width = args.width, "layout");

    if json {
        let columns = vp
            .specs
            .iter()
            .zip(&vp.full_cols)
            .zip(&vp.widths)
            .map(|((spec, &index), &width)| ColumnJson {
                title: spec.title.clone(),
                index,
                width,
                sort: tab.sorts.iter().find(|s| s.col == index).map(|s| s.dir),
            })
            .collect();
        let rows = vp
            .cells
            .iter()
            .zip(&tab.rows)
            .map(|(cells, meta)| RowJson {
                id: meta.id,
                cells: cells
                    .iter()
                    .map(|c| if c.null { None } else { Some(c.value.clone()) })
                    .collect(),
                dimmed: meta.dimmed,
                deleted: meta.deleted,
            })
            .collect();
        let out = LayoutJson {
            tab: tab.kind,
            width: args.width,
            visible_columns: vp.visible_count,
            window: vp.window,
            cursor: vp.cursor,
            columns,
            separators: vp.separators.clone(),
            pins: pin_summary(&tab),
            rows,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let seps = SeparatorStyle {
        plain: &config.ui.separator,
        gap: &config.ui.gap_separator,
    };
    println!(
        "{}: columns {}..{} of {} visible, {} rows",
        tab.kind.label(),
        vp.window.start,
        vp.window.end,
        vp.visible_count,
        tab.rows.len()
    );
    let pins = pin_summary(&tab);
    if !pins.is_empty() {
        let mode = match (tab.filter_active, tab.filter_inverted) {
            (true, false) => "filter",
            (true, true) => "filter, inverted",
            (false, false) => "preview",
            (false, true) => "preview, inverted",
        };
        println!("pins ({}): {}", mode, pins);
    }
    for line in format_viewport(&vp, &seps, args.width) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_tabs(json: bool, household: &Household, show_deleted: bool) -> CmdResult {
    let tabs: Vec<TabJson> = TabKind::ALL
        .iter()
        .map(|&kind| {
            let tab = new_tab(kind, household, show_deleted);
            TabJson {
                tab: kind,
                label: kind.label(),
                rows: tab.rows.len(),
                columns: tab.specs.len(),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&tabs)?);
        return Ok(());
    }
    for t in &tabs {
        println!("{:<12} {:>3} rows  {:>2} columns", t.label, t.rows, t.columns);
    }
    Ok(())
}
