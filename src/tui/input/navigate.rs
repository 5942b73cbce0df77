use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::ops::columns::{
    first_column, hide_column, last_column, move_column_cursor, show_all_columns, unhide_last,
};
use crate::ops::filter::{apply_row_filter, set_filter_active, set_filter_inverted};
use crate::ops::pins::{cell_key, clear_pins, has_pins, toggle_pin};
use crate::ops::sort::{apply_sorts, toggle_sort};
use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => {
            app.show_help = true;
            app.help_scroll = 0;
        }

        // Columns
        KeyCode::Char('h') | KeyCode::Left => move_column_cursor(app.tab_mut(), -1),
        KeyCode::Char('l') | KeyCode::Right => move_column_cursor(app.tab_mut(), 1),
        KeyCode::Char('0') | KeyCode::Home => first_column(app.tab_mut()),
        KeyCode::Char('$') | KeyCode::End => last_column(app.tab_mut()),

        // Rows
        KeyCode::Char('j') | KeyCode::Down => move_row(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_row(app, -1),
        KeyCode::Char('g') => app.tab_mut().row_cursor = 0,
        KeyCode::Char('G') => {
            let tab = app.tab_mut();
            tab.row_cursor = tab.rows.len().saturating_sub(1);
        }

        // Tabs
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),

        // Column visibility
        KeyCode::Char('c') => hide_cursor_column(app),
        KeyCode::Char('C') => {
            show_all_columns(app.tab_mut());
            app.status = Some("all columns shown".into());
        }
        KeyCode::Char('U') => {
            let tab = app.tab_mut();
            let msg = match unhide_last(tab) {
                Some(col) => format!("showing {}", tab.specs[col].title),
                None => "no hidden columns".to_string(),
            };
            app.status = Some(msg);
        }

        // Pins and filter
        KeyCode::Char('n') if ctrl => {
            let mag_mode = app.mag_mode;
            let tab = app.tab_mut();
            clear_pins(tab);
            apply_row_filter(tab, mag_mode);
            app.status = Some("pins cleared".into());
        }
        KeyCode::Char('n') => toggle_cursor_pin(app),
        KeyCode::Char('N') => toggle_filter(app),
        KeyCode::Char('!') => toggle_invert(app),

        // Display
        KeyCode::Char('m') => {
            let on = !app.mag_mode;
            app.set_mag_mode(on);
        }
        KeyCode::Char('s') => {
            let mag_mode = app.mag_mode;
            let tab = app.tab_mut();
            let col = tab.col_cursor;
            toggle_sort(tab, col);
            apply_sorts(tab);
            apply_row_filter(tab, mag_mode);
        }
        KeyCode::Char('x') => {
            app.show_deleted = !app.show_deleted;
            app.reload_all();
            app.status = Some(if app.show_deleted {
                "showing deleted".into()
            } else {
                "hiding deleted".into()
            });
        }
        _ => {}
    }
}

fn move_row(app: &mut App, delta: isize) {
    let tab = app.tab_mut();
    if tab.rows.is_empty() {
        return;
    }
    let last = tab.rows.len() as isize - 1;
    tab.row_cursor = (tab.row_cursor as isize + delta).clamp(0, last) as usize;
}

fn hide_cursor_column(app: &mut App) {
    let mag_mode = app.mag_mode;
    let tab = app.tab_mut();
    let col = tab.col_cursor;
    let title = tab.specs.get(col).map(|s| s.title.clone()).unwrap_or_default();
    match hide_column(tab, col) {
        Ok(()) => {
            // Pins on the column are gone, so rows may come back
            apply_row_filter(tab, mag_mode);
            app.status = Some(format!("hid {}", title));
        }
        Err(e) => app.status = Some(e.to_string()),
    }
}

fn toggle_cursor_pin(app: &mut App) {
    let mag_mode = app.mag_mode;
    let tab = app.tab_mut();
    let col = tab.col_cursor;
    let Some(cell) = tab.cursor_cell() else {
        app.status = Some("nothing to pin".into());
        return;
    };
    let key = cell_key(cell, mag_mode);
    let pinned = toggle_pin(tab, col, &key);
    apply_row_filter(tab, mag_mode);
    debug!(col, pinned, "pin from cursor");
    app.status = Some(if pinned { "pinned".into() } else { "unpinned".into() });
}

fn toggle_filter(app: &mut App) {
    let mag_mode = app.mag_mode;
    let tab = app.tab_mut();
    if !has_pins(tab) {
        app.status = Some("no pins: press n on a cell first".into());
        return;
    }
    let active = !tab.filter_active;
    set_filter_active(tab, active);
    apply_row_filter(tab, mag_mode);
}

fn toggle_invert(app: &mut App) {
    let mag_mode = app.mag_mode;
    let tab = app.tab_mut();
    if !has_pins(tab) {
        app.status = Some("no pins to invert".into());
        return;
    }
    let inverted = !tab.filter_inverted;
    set_filter_inverted(tab, inverted);
    apply_row_filter(tab, mag_mode);
}
