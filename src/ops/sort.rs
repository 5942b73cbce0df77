//! Column sort cycling and stable row ordering.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::model::{Cell, CellKind, RowMeta, SortDir, SortEntry, Tab};
use crate::ops::magnitude::parse_number;

/// Cycle the sort on full column `col`: none → ascending → descending → none.
/// A newly sorted column is appended, so it breaks ties of existing sorts.
pub fn toggle_sort(tab: &mut Tab, col: usize) {
    match tab.sorts.iter().position(|s| s.col == col) {
        Some(idx) => match tab.sorts[idx].dir {
            SortDir::Asc => tab.sorts[idx].dir = SortDir::Desc,
            SortDir::Desc => {
                tab.sorts.remove(idx);
            }
        },
        None => tab.sorts.push(SortEntry {
            col,
            dir: SortDir::Asc,
        }),
    }
}

/// Stable-sort the full snapshot by the tab's sorts, then by row ID
pub fn apply_sorts(tab: &mut Tab) {
    let mut paired: Vec<(Vec<Cell>, RowMeta)> = std::mem::take(&mut tab.full_cell_rows)
        .into_iter()
        .zip(std::mem::take(&mut tab.full_rows))
        .collect();

    paired.sort_by(|(a, am), (b, bm)| {
        for sort in &tab.sorts {
            let ord = match (a.get(sort.col), b.get(sort.col)) {
                (Some(x), Some(y)) => compare_cells(x, y, sort.dir),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        am.id.cmp(&bm.id)
    });

    let (cells, meta): (Vec<_>, Vec<_>) = paired.into_iter().unzip();
    tab.full_cell_rows = cells;
    tab.full_rows = meta;
}

/// Compare two cells in `dir`. Nulls sort last either way.
pub fn compare_cells(a: &Cell, b: &Cell, dir: SortDir) -> Ordering {
    match (a.null, b.null) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    let ord = compare_values(a, b);
    match dir {
        SortDir::Asc => ord,
        SortDir::Desc => ord.reverse(),
    }
}

fn compare_values(a: &Cell, b: &Cell) -> Ordering {
    match a.kind {
        CellKind::Money | CellKind::Integer | CellKind::Id | CellKind::Drilldown => {
            match (parse_number(&a.value), parse_number(&b.value)) {
                (Some(x), Some(y)) => return x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                (Some(_), None) => return Ordering::Less,
                (None, Some(_)) => return Ordering::Greater,
                (None, None) => {}
            }
        }
        CellKind::Date => {
            let parse = |v: &str| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok();
            if let (Some(x), Some(y)) = (parse(&a.value), parse(&b.value)) {
                return x.cmp(&y);
            }
        }
        CellKind::Text | CellKind::Status => {}
    }
    a.value.to_lowercase().cmp(&b.value.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColumnSpec, TabKind};

    fn tab(rows: &[(u64, &str, Option<&str>)]) -> Tab {
        let mut tab = Tab::new(
            TabKind::Quotes,
            vec![
                ColumnSpec::new("Vendor", CellKind::Text),
                ColumnSpec::new("Total", CellKind::Money),
            ],
        );
        let cells = rows
            .iter()
            .map(|(_, name, total)| {
                vec![
                    Cell::new(*name, CellKind::Text),
                    Cell::optional(total.map(String::from), CellKind::Money),
                ]
            })
            .collect();
        let meta = rows.iter().map(|(id, _, _)| RowMeta::new(*id)).collect();
        tab.load(cells, meta);
        tab
    }

    fn ids(tab: &Tab) -> Vec<u64> {
        tab.full_rows.iter().map(|m| m.id).collect()
    }

    #[test]
    fn toggle_cycles_direction() {
        let mut t = tab(&[]);
        toggle_sort(&mut t, 1);
        assert_eq!(t.sorts, vec![SortEntry { col: 1, dir: SortDir::Asc }]);
        toggle_sort(&mut t, 1);
        assert_eq!(t.sorts, vec![SortEntry { col: 1, dir: SortDir::Desc }]);
        toggle_sort(&mut t, 1);
        assert!(t.sorts.is_empty());
    }

    #[test]
    fn money_sorts_numerically_with_nulls_last() {
        let mut t = tab(&[
            (1, "a", Some("$900.00")),
            (2, "b", None),
            (3, "c", Some("$1,200.00")),
            (4, "d", Some("$85.00")),
        ]);
        toggle_sort(&mut t, 1);
        apply_sorts(&mut t);
        assert_eq!(ids(&t), vec![4, 1, 3, 2]);

        toggle_sort(&mut t, 1);
        apply_sorts(&mut t);
        assert_eq!(ids(&t), vec![3, 1, 4, 2]);
    }

    #[test]
    fn text_sort_ignores_case_and_ties_on_id() {
        let mut t = tab(&[
            (3, "beta", None),
            (1, "Alpha", None),
            (2, "beta", None),
        ]);
        toggle_sort(&mut t, 0);
        apply_sorts(&mut t);
        assert_eq!(ids(&t), vec![1, 2, 3]);
    }

    #[test]
    fn no_sorts_orders_by_id() {
        let mut t = tab(&[(2, "x", None), (1, "y", None)]);
        apply_sorts(&mut t);
        assert_eq!(ids(&t), vec![1, 2]);
        assert_eq!(t.full_cell_rows[0][0].value, "y");
    }

    #[test]
    fn dates_compare_chronologically() {
        let a = Cell::new("2024-12-01", CellKind::Date);
        let b = Cell::new("2025-01-15", CellKind::Date);
        assert_eq!(compare_cells(&a, &b, SortDir::Asc), Ordering::Less);
        assert_eq!(compare_cells(&a, &b, SortDir::Desc), Ordering::Greater);
    }
}
