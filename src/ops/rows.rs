//! Row sources: how each tab turns household records into grid rows.
//!
//! Each entity kind supplies its column specs and a row builder; `build` is
//! the single place that dispatches on the kind.

use chrono::{Months, NaiveDate};
use tracing::debug;

use crate::model::{
    Cell, CellKind, ColumnSpec, Household, MaintenanceItem, Project, ProjectStatus, Quote,
    RowMeta, Tab, TabKind, Vendor, format_money,
};
use crate::ops::filter::apply_row_filter;
use crate::ops::sort::apply_sorts;

type Rows = (Vec<Vec<Cell>>, Vec<RowMeta>);

/// Column specs for a tab, all visible
pub fn specs(kind: TabKind) -> Vec<ColumnSpec> {
    match kind {
        TabKind::Projects => project_specs(),
        TabKind::Quotes => quote_specs(),
        TabKind::Maintenance => maintenance_specs(),
        TabKind::Vendors => vendor_specs(),
    }
}

/// Rows for a tab. Deleted records are skipped unless `show_deleted`.
pub fn build(kind: TabKind, household: &Household, show_deleted: bool) -> Rows {
    match kind {
        TabKind::Projects => collect(&household.projects, show_deleted, |p| p.deleted, |p| {
            (p.id, project_row(p, household))
        }),
        TabKind::Quotes => collect(&household.quotes, show_deleted, |q| q.deleted, |q| {
            (q.id, quote_row(q, household))
        }),
        TabKind::Maintenance => collect(&household.maintenance, show_deleted, |m| m.deleted, |m| {
            (m.id, maintenance_row(m))
        }),
        TabKind::Vendors => collect(&household.vendors, show_deleted, |v| v.deleted, |v| {
            (v.id, vendor_row(v, household))
        }),
    }
}

/// A fresh tab for `kind`, loaded and filtered
pub fn new_tab(kind: TabKind, household: &Household, show_deleted: bool) -> Tab {
    let mut tab = Tab::new(kind, specs(kind));
    reload(&mut tab, household, show_deleted, false);
    tab
}

/// Replace the tab's snapshot from `household`, keeping its column, pin and
/// sort state, then re-sort and re-filter.
pub fn reload(tab: &mut Tab, household: &Household, show_deleted: bool, mag_mode: bool) {
    let (cells, meta) = build(tab.kind, household, show_deleted);
    debug!(tab = tab.kind.label(), rows = cells.len(), "reloaded rows");
    tab.load(cells, meta);
    apply_sorts(tab);
    apply_row_filter(tab, mag_mode);
}

fn collect<T>(
    items: &[T],
    show_deleted: bool,
    is_deleted: impl Fn(&T) -> bool,
    to_row: impl Fn(&T) -> (u64, Vec<Cell>),
) -> Rows {
    items
        .iter()
        .filter(|item| show_deleted || !is_deleted(item))
        .map(|item| {
            let (id, cells) = to_row(item);
            let meta = RowMeta {
                deleted: is_deleted(item),
                ..RowMeta::new(id)
            };
            (cells, meta)
        })
        .unzip()
}

fn id_cell(id: u64) -> Cell {
    Cell::new(id.to_string(), CellKind::Id)
}

fn money_cell(cents: Option<i64>) -> Cell {
    Cell::optional(cents.map(format_money), CellKind::Money)
}

fn date_cell(date: Option<NaiveDate>) -> Cell {
    Cell::optional(date.map(|d| d.format("%Y-%m-%d").to_string()), CellKind::Date)
}

fn text_cell(text: Option<&str>) -> Cell {
    Cell::optional(text.map(String::from), CellKind::Text)
}

fn id_spec() -> ColumnSpec {
    ColumnSpec::new("ID", CellKind::Id).min(2).max(6).right()
}

fn money_spec(title: &str) -> ColumnSpec {
    ColumnSpec::new(title, CellKind::Money).min(6).max(14).right()
}

fn date_spec(title: &str) -> ColumnSpec {
    ColumnSpec::new(title, CellKind::Date).min(10).max(10)
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

fn project_specs() -> Vec<ColumnSpec> {
    vec![
        id_spec(),
        ColumnSpec::new("Type", CellKind::Text).min(4).max(14),
        ColumnSpec::new("Title", CellKind::Text).min(8).max(40).flex(),
        ColumnSpec::new("Status", CellKind::Status)
            .min(6)
            .max(10)
            .fixed_values(ProjectStatus::ALL.iter().map(|s| s.label())),
        money_spec("Budget"),
        money_spec("Actual"),
        date_spec("Start"),
        date_spec("End"),
        ColumnSpec::new("Quotes", CellKind::Drilldown).min(3).max(9).right(),
    ]
}

fn project_row(p: &Project, household: &Household) -> Vec<Cell> {
    let quotes = household
        .quotes
        .iter()
        .filter(|q| q.project_id == p.id && !q.deleted)
        .count();
    vec![
        id_cell(p.id),
        Cell::new(p.kind.clone(), CellKind::Text),
        Cell::new(p.title.clone(), CellKind::Text),
        Cell::new(p.status.label(), CellKind::Status),
        money_cell(p.budget),
        money_cell(p.actual),
        date_cell(p.start),
        date_cell(p.end),
        Cell::new(quotes.to_string(), CellKind::Drilldown),
    ]
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

fn quote_specs() -> Vec<ColumnSpec> {
    vec![
        id_spec(),
        ColumnSpec::new("Project", CellKind::Text)
            .min(8)
            .max(32)
            .flex()
            .link(TabKind::Projects),
        ColumnSpec::new("Vendor", CellKind::Text)
            .min(8)
            .max(28)
            .flex()
            .link(TabKind::Vendors),
        money_spec("Total"),
        money_spec("Labor"),
        money_spec("Materials"),
        date_spec("Received"),
    ]
}

fn quote_row(q: &Quote, household: &Household) -> Vec<Cell> {
    let project = household.projects.iter().find(|p| p.id == q.project_id);
    let vendor = household.vendors.iter().find(|v| v.id == q.vendor_id);
    vec![
        id_cell(q.id),
        text_cell(project.map(|p| p.title.as_str())).with_link(q.project_id),
        text_cell(vendor.map(|v| v.name.as_str())).with_link(q.vendor_id),
        money_cell(Some(q.total)),
        money_cell(q.labor),
        money_cell(q.materials),
        date_cell(q.received),
    ]
}

// ---------------------------------------------------------------------------
// Maintenance
// ---------------------------------------------------------------------------

fn maintenance_specs() -> Vec<ColumnSpec> {
    vec![
        id_spec(),
        ColumnSpec::new("Item", CellKind::Text).min(8).max(36).flex(),
        ColumnSpec::new("Category", CellKind::Text).min(5).max(14),
        ColumnSpec::new("Every", CellKind::Integer).min(3).max(6).right(),
        date_spec("Last"),
        date_spec("Next"),
        money_spec("Cost"),
    ]
}

/// Due date from the last service and the interval in months
pub fn next_due(last: Option<NaiveDate>, interval_months: Option<u32>) -> Option<NaiveDate> {
    last?.checked_add_months(Months::new(interval_months?))
}

fn maintenance_row(m: &MaintenanceItem) -> Vec<Cell> {
    vec![
        id_cell(m.id),
        Cell::new(m.name.clone(), CellKind::Text),
        Cell::new(m.category.clone(), CellKind::Text),
        Cell::optional(m.interval_months.map(|n| n.to_string()), CellKind::Integer),
        date_cell(m.last_serviced),
        date_cell(next_due(m.last_serviced, m.interval_months)),
        money_cell(m.cost),
    ]
}

// ---------------------------------------------------------------------------
// Vendors
// ---------------------------------------------------------------------------

fn vendor_specs() -> Vec<ColumnSpec> {
    vec![
        id_spec(),
        ColumnSpec::new("Name", CellKind::Text).min(8).max(32).flex(),
        ColumnSpec::new("Contact", CellKind::Text).min(6).max(20),
        ColumnSpec::new("Email", CellKind::Text).min(6).max(32).flex(),
        ColumnSpec::new("Phone", CellKind::Text).min(8).max(16),
        ColumnSpec::new("Website", CellKind::Text).min(6).max(28),
        ColumnSpec::new("Quotes", CellKind::Drilldown).min(3).max(9).right(),
    ]
}

fn vendor_row(v: &Vendor, household: &Household) -> Vec<Cell> {
    let quotes = household
        .quotes
        .iter()
        .filter(|q| q.vendor_id == v.id && !q.deleted)
        .count();
    vec![
        id_cell(v.id),
        Cell::new(v.name.clone(), CellKind::Text),
        text_cell(v.contact.as_deref()),
        text_cell(v.email.as_deref()),
        text_cell(v.phone.as_deref()),
        text_cell(v.website.as_deref()),
        Cell::new(quotes.to_string(), CellKind::Drilldown),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_align_with_specs() {
        let household = Household::demo();
        for kind in TabKind::ALL {
            let specs = specs(kind);
            let (cells, meta) = build(kind, &household, true);
            assert_eq!(cells.len(), meta.len());
            for row in &cells {
                assert_eq!(row.len(), specs.len(), "{:?}", kind);
                for (cell, spec) in row.iter().zip(&specs) {
                    assert_eq!(cell.kind, spec.kind, "{:?} {}", kind, spec.title);
                }
            }
        }
    }

    #[test]
    fn deleted_rows_hidden_by_default() {
        let household = Household::demo();
        let (hidden, _) = build(TabKind::Projects, &household, false);
        let (shown, meta) = build(TabKind::Projects, &household, true);
        assert_eq!(hidden.len() + 1, shown.len());
        assert_eq!(meta.iter().filter(|m| m.deleted).count(), 1);
    }

    #[test]
    fn missing_values_become_null_cells() {
        let household = Household::demo();
        let (cells, meta) = build(TabKind::Projects, &household, false);
        let solar = meta.iter().position(|m| m.id == 4).unwrap();
        assert!(cells[solar][4].null);
        assert_eq!(cells[solar][4].value, "");
    }

    #[test]
    fn quote_links_point_at_records() {
        let household = Household::demo();
        let (cells, _) = build(TabKind::Quotes, &household, false);
        assert_eq!(cells[0][1].value, "Kitchen backsplash");
        assert_eq!(cells[0][1].link_id, 1);
        assert_eq!(cells[0][2].link_id, 2);
    }

    #[test]
    fn drilldown_counts_quotes() {
        let household = Household::demo();
        let (cells, meta) = build(TabKind::Projects, &household, false);
        let basement = meta.iter().position(|m| m.id == 5).unwrap();
        assert_eq!(cells[basement][8].value, "2");
    }

    #[test]
    fn next_due_adds_months() {
        let last = NaiveDate::from_ymd_opt(2025, 1, 31);
        assert_eq!(next_due(last, Some(1)), NaiveDate::from_ymd_opt(2025, 2, 28));
        assert_eq!(next_due(last, None), None);
        assert_eq!(next_due(None, Some(3)), None);
    }

    #[test]
    fn reload_keeps_pins_and_sorts() {
        let household = Household::demo();
        let mut tab = new_tab(TabKind::Maintenance, &household, false);
        crate::ops::sort::toggle_sort(&mut tab, 6);
        crate::ops::pins::toggle_pin(&mut tab, 2, "exterior");
        tab.filter_active = true;
        reload(&mut tab, &household, false, false);

        let ids: Vec<u64> = tab.rows.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 5]);
        assert_eq!(tab.full_rows.len(), 5);
    }
}
