//! Column width allocation.
//!
//! Widths start from what each column's content needs and are then either
//! grown into spare terminal width or shrunk to fit, honoring each column's
//! `min`, `max` and `flex` settings. All adjustments move one cell at a time,
//! round-robin in column order, so spare or missing width spreads evenly.

use crate::model::{Cell, ColumnSpec};
use crate::util::unicode::display_width;

/// Content-driven width of each column, before any `max` cap.
///
/// The widest of: the header (with glyphs), every fixed value, and every
/// non-empty cell. Never below the column's `min`.
pub fn natural_widths(specs: &[ColumnSpec], rows: &[Vec<Cell>]) -> Vec<usize> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let header = display_width(&spec.header());
            let fixed = spec
                .fixed_values
                .iter()
                .map(|v| display_width(v))
                .max()
                .unwrap_or(0);
            let content = rows
                .iter()
                .filter_map(|row| row.get(i))
                .filter(|cell| !cell.value.is_empty())
                .map(|cell| display_width(&cell.value))
                .max()
                .unwrap_or(0);
            header.max(fixed).max(content).max(spec.min)
        })
        .collect()
}

/// Width for each column so that widths plus `sep` between each pair fit in
/// `available` where possible. The result is index-aligned with `specs` and
/// every entry is at least 1.
pub fn column_widths(
    specs: &[ColumnSpec],
    rows: &[Vec<Cell>],
    available: usize,
    sep: usize,
) -> Vec<usize> {
    if specs.is_empty() {
        return Vec::new();
    }
    let natural = natural_widths(specs, rows);
    let target = available.saturating_sub(sep * (specs.len() - 1));
    let natural_total: usize = natural.iter().sum();

    let mut widths;
    if natural_total <= target {
        widths = natural;
        grow_flex(&mut widths, specs, target - natural_total);
    } else {
        widths = natural
            .iter()
            .zip(specs)
            .map(|(&w, spec)| capped(w, spec))
            .collect::<Vec<_>>();
        let capped_total: usize = widths.iter().sum();
        if capped_total <= target {
            let slack = widen_toward(&mut widths, &natural, target - capped_total);
            grow_flex(&mut widths, specs, slack);
        } else {
            shrink_flex(&mut widths, specs, capped_total - target);
        }
    }

    for w in &mut widths {
        *w = (*w).max(1);
    }
    widths
}

fn capped(width: usize, spec: &ColumnSpec) -> usize {
    if spec.max == 0 {
        width
    } else {
        width.min(spec.max.max(spec.min))
    }
}

/// Flex columns, or every column when none is flagged
fn adjustable(specs: &[ColumnSpec]) -> Vec<usize> {
    let flex: Vec<usize> = specs
        .iter()
        .enumerate()
        .filter(|(_, s)| s.flex)
        .map(|(i, _)| i)
        .collect();
    if flex.is_empty() {
        (0..specs.len()).collect()
    } else {
        flex
    }
}

/// Hand out `slack` to adjustable columns without passing their `max`.
fn grow_flex(widths: &mut [usize], specs: &[ColumnSpec], mut slack: usize) {
    let eligible = adjustable(specs);
    while slack > 0 {
        let mut grew = false;
        for &i in &eligible {
            if slack == 0 {
                break;
            }
            let max = specs[i].max;
            if max > 0 && widths[i] >= max {
                continue;
            }
            widths[i] += 1;
            slack -= 1;
            grew = true;
        }
        if !grew {
            break;
        }
    }
}

/// Give truncated columns back their natural width first. Returns the slack
/// left over.
fn widen_toward(widths: &mut [usize], natural: &[usize], mut slack: usize) -> usize {
    while slack > 0 {
        let mut grew = false;
        for (w, &nat) in widths.iter_mut().zip(natural) {
            if slack == 0 {
                break;
            }
            if *w < nat {
                *w += 1;
                slack -= 1;
                grew = true;
            }
        }
        if !grew {
            break;
        }
    }
    slack
}

/// Take `excess` away from adjustable columns, never below their `min`.
/// Stops early when nothing can shrink further.
fn shrink_flex(widths: &mut [usize], specs: &[ColumnSpec], mut excess: usize) {
    let eligible = adjustable(specs);
    while excess > 0 {
        let mut shrunk = false;
        for &i in &eligible {
            if excess == 0 {
                break;
            }
            if widths[i] > specs[i].min.max(1) {
                widths[i] -= 1;
                excess -= 1;
                shrunk = true;
            }
        }
        if !shrunk {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellKind;
    use crate::model::TabKind;

    fn text(v: &str) -> Cell {
        Cell::new(v, CellKind::Text)
    }

    fn sum_with_seps(widths: &[usize], sep: usize) -> usize {
        widths.iter().sum::<usize>() + sep * widths.len().saturating_sub(1)
    }

    #[test]
    fn natural_width_takes_widest_source() {
        let specs = vec![
            ColumnSpec::new("Status", CellKind::Status)
                .fixed_values(["ideating", "completed", "abandoned"]),
            ColumnSpec::new("Vendor", CellKind::Text).link(TabKind::Vendors),
            ColumnSpec::new("N", CellKind::Integer).min(4),
        ];
        let rows = vec![vec![text("planned"), text("Ace"), text("12")]];
        assert_eq!(natural_widths(&specs, &rows), vec![9, 8, 4]);
    }

    #[test]
    fn natural_width_ignores_empty_and_null_cells() {
        let specs = vec![ColumnSpec::new("Cost", CellKind::Money)];
        let rows = vec![vec![Cell::null(CellKind::Money)], vec![text("")]];
        assert_eq!(natural_widths(&specs, &rows), vec![4]);
    }

    #[test]
    fn slack_goes_to_flex_up_to_max() {
        let specs = vec![
            ColumnSpec::new("ID", CellKind::Id).min(2).max(4),
            ColumnSpec::new("Title", CellKind::Text).min(5).max(20).flex(),
        ];
        let rows = vec![
            vec![text("1"), text("Fix sink")],
            vec![text("12"), text("Paint")],
        ];
        assert_eq!(column_widths(&specs, &rows, 30, 3), vec![2, 20]);
    }

    #[test]
    fn slack_goes_round_robin_without_flex() {
        let specs = vec![
            ColumnSpec::new("A", CellKind::Text),
            ColumnSpec::new("B", CellKind::Text),
        ];
        let rows = vec![vec![text("x"), text("y")]];
        let widths = column_widths(&specs, &rows, 6, 1);
        assert_eq!(widths, vec![3, 2]);
        assert_eq!(sum_with_seps(&widths, 1), 6);
    }

    #[test]
    fn fitting_content_is_never_truncated() {
        let specs = vec![
            ColumnSpec::new("Name", CellKind::Text).max(4),
            ColumnSpec::new("Note", CellKind::Text).flex(),
        ];
        let rows = vec![vec![text("Brightline"), text("ok")]];
        let widths = column_widths(&specs, &rows, 40, 3);
        assert_eq!(widths[0], 10);
        assert!(sum_with_seps(&widths, 3) <= 40);
    }

    #[test]
    fn truncated_columns_widen_before_flex() {
        let specs = vec![
            ColumnSpec::new("Name", CellKind::Text).min(4).max(6),
            ColumnSpec::new("Note", CellKind::Text).min(4).max(6).flex(),
        ];
        let rows = vec![vec![text("Abcdefghij"), text("Klmnopqrst")]];
        assert_eq!(column_widths(&specs, &rows, 17, 1), vec![8, 8]);
    }

    #[test]
    fn overflow_shrinks_flex_columns() {
        let specs = vec![
            ColumnSpec::new("Title", CellKind::Text).min(5).flex(),
            ColumnSpec::new("Status", CellKind::Status).min(6).max(10),
        ];
        let rows = vec![vec![text(&"x".repeat(30)), text("underway")]];
        let widths = column_widths(&specs, &rows, 20, 1);
        assert_eq!(widths, vec![11, 8]);
        assert_eq!(sum_with_seps(&widths, 1), 20);
    }

    #[test]
    fn shrinking_stops_at_min() {
        let specs = vec![
            ColumnSpec::new("Title", CellKind::Text).min(5).flex(),
            ColumnSpec::new("Status", CellKind::Status).min(6).max(10),
        ];
        let rows = vec![vec![text(&"x".repeat(30)), text("underway")]];
        assert_eq!(column_widths(&specs, &rows, 10, 1), vec![5, 8]);
    }

    #[test]
    fn widths_respect_min_and_stay_positive_on_tiny_terminals() {
        let specs = vec![
            ColumnSpec::new("A", CellKind::Text).min(3).flex(),
            ColumnSpec::new("B", CellKind::Text).min(0),
            ColumnSpec::new("C", CellKind::Text).min(2).max(2),
        ];
        let rows = vec![vec![text("aaaaaa"), text(""), text("cccc")]];
        let widths = column_widths(&specs, &rows, 0, 3);
        assert_eq!(widths.len(), 3);
        for (w, spec) in widths.iter().zip(&specs) {
            assert!(*w >= 1);
            assert!(*w >= spec.min);
        }
    }

    #[test]
    fn max_ceiling_holds_when_content_overflows() {
        let specs = vec![
            ColumnSpec::new("Item", CellKind::Text).min(4).max(12).flex(),
            ColumnSpec::new("Category", CellKind::Text).min(4).max(10),
            ColumnSpec::new("Notes", CellKind::Text).min(5).max(15).flex(),
        ];
        let rows = vec![vec![
            text(&"i".repeat(40)),
            text(&"c".repeat(40)),
            text(&"n".repeat(40)),
        ]];
        let widths = column_widths(&specs, &rows, 30, 1);
        for (w, spec) in widths.iter().zip(&specs) {
            assert!(*w >= spec.min);
            assert!(*w <= spec.max);
        }
        assert_eq!(sum_with_seps(&widths, 1), 30);
    }

    #[test]
    fn empty_specs_yield_no_widths() {
        assert!(column_widths(&[], &[], 80, 3).is_empty());
    }
}
