//! One render's worth of grid layout.
//!
//! Everything here is recomputed from the tab snapshot on each call:
//! hidden columns are projected away, widths are sized against the
//! projected content, and a scroll window is cut out of the sized columns
//! so the cursor column is always on screen.

use serde::Serialize;
use tracing::trace;

use crate::model::{Cell, ColumnSpec, SortEntry, Tab};
use crate::ops::magnitude::display_rows;
use crate::ops::pins::has_pins;
use crate::ops::visibility::{project, project_cells};
use crate::ops::width::column_widths;
use crate::ops::window::{ScrollWindow, compute_window};

/// What to draw between two adjacent columns in the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    Plain,
    /// Hidden columns sit between the two neighbors
    Gap,
}

/// Layout decisions for the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Viewport {
    /// Specs of the columns in the window
    pub specs: Vec<ColumnSpec>,
    /// Displayed rows cut to the window, values in the current display mode
    pub cells: Vec<Vec<Cell>>,
    /// Width of each window column
    pub widths: Vec<usize>,
    /// Window bounds in visible-column space
    pub window: ScrollWindow,
    /// Cursor column relative to the window start
    pub cursor: Option<usize>,
    /// One entry per adjacent pair of window columns
    pub separators: Vec<Separator>,
    /// Full column index of each window column
    pub full_cols: Vec<usize>,
    /// Sorts on visible columns, in visible space
    pub sorts: Vec<SortEntry>,
    /// Number of visible columns, in or out of the window
    pub visible_count: usize,
}

/// Lay out `tab` for a terminal `term_width` cells wide with `sep_width`
/// cells between columns.
pub fn compute_viewport(tab: &Tab, term_width: usize, sep_width: usize, mag_mode: bool) -> Viewport {
    let shown = display_rows(&tab.cell_rows, mag_mode);
    let proj = project(&tab.specs, &shown, tab.col_cursor, &tab.sorts);

    // With pins, size columns from every row so toggling the filter doesn't
    // make the grid jump.
    let widths = if has_pins(tab) {
        let full = display_rows(&tab.full_cell_rows, mag_mode);
        let full_visible = project_cells(&full, &proj.vis_to_full);
        column_widths(&proj.specs, &full_visible, term_width, sep_width)
    } else {
        column_widths(&proj.specs, &proj.cells, term_width, sep_width)
    };

    let window = compute_window(&widths, sep_width, term_width, tab.view_offset, proj.cursor);
    let range = window.start..window.end;

    let full_cols = proj.vis_to_full[range.clone()].to_vec();
    let separators = full_cols
        .windows(2)
        .map(|pair| {
            if pair[1] == pair[0] + 1 {
                Separator::Plain
            } else {
                Separator::Gap
            }
        })
        .collect();
    let cells = proj
        .cells
        .iter()
        .map(|row| {
            row.get(range.start.min(row.len())..range.end.min(row.len()))
                .map(<[Cell]>::to_vec)
                .unwrap_or_default()
        })
        .collect();
    let cursor = proj
        .cursor
        .filter(|c| window.contains(*c))
        .map(|c| c - window.start);

    trace!(
        tab = tab.kind.label(),
        term_width,
        visible = proj.specs.len(),
        start = window.start,
        end = window.end,
        in_window = window.len(),
        "computed viewport"
    );

    Viewport {
        specs: proj.specs[range.clone()].to_vec(),
        cells,
        widths: widths[range].to_vec(),
        window,
        cursor,
        separators,
        full_cols,
        sorts: proj.sorts,
        visible_count: proj.vis_to_full.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellKind, RowMeta, TabKind};
    use crate::ops::columns::hide_column;
    use crate::ops::filter::{apply_row_filter, set_filter_active};
    use crate::ops::pins::toggle_pin;

    fn sample() -> Tab {
        let specs = vec![
            ColumnSpec::new("ID", CellKind::Id).right(),
            ColumnSpec::new("Name", CellKind::Text).flex(),
            ColumnSpec::new("Kind", CellKind::Text),
            ColumnSpec::new("Cost", CellKind::Money).right(),
        ];
        let mut tab = Tab::new(TabKind::Maintenance, specs);
        let rows = [
            (1, "Gutter cleaning", "Exterior", "$150.00"),
            (2, "Filter", "HVAC", "$24.00"),
            (3, "Chimney sweep and inspection", "Exterior", "$2,250.00"),
        ];
        let cells = rows
            .iter()
            .map(|(id, name, kind, cost)| {
                vec![
                    Cell::new(id.to_string(), CellKind::Id),
                    Cell::new(*name, CellKind::Text),
                    Cell::new(*kind, CellKind::Text),
                    Cell::new(*cost, CellKind::Money),
                ]
            })
            .collect();
        let meta = rows.iter().map(|r| RowMeta::new(r.0)).collect();
        tab.load(cells, meta);
        tab
    }

    #[test]
    fn wide_terminal_shows_everything() {
        let tab = sample();
        let vp = compute_viewport(&tab, 120, 3, false);
        assert_eq!(vp.specs.len(), 4);
        assert_eq!((vp.window.start, vp.window.end), (0, 4));
        assert_eq!(vp.window.len(), vp.specs.len());
        assert!(!vp.window.has_left && !vp.window.has_right);
        assert_eq!(vp.separators, vec![Separator::Plain; 3]);
        assert_eq!(vp.cursor, Some(0));
        assert_eq!(vp.widths.iter().sum::<usize>() + 3 * 3, 120);
    }

    #[test]
    fn hidden_column_produces_gap_separator() {
        let mut tab = sample();
        hide_column(&mut tab, 2).unwrap();
        let vp = compute_viewport(&tab, 120, 3, false);
        assert_eq!(vp.full_cols, vec![0, 1, 3]);
        assert_eq!(vp.separators, vec![Separator::Plain, Separator::Gap]);
        assert_eq!(vp.cells[0].len(), 3);
        assert_eq!(vp.cells[0][2].value, "$150.00");
    }

    #[test]
    fn narrow_terminal_keeps_cursor_in_window() {
        let mut tab = sample();
        tab.col_cursor = 3;
        let vp = compute_viewport(&tab, 20, 3, false);
        assert!(vp.window.has_left);
        assert_eq!(vp.full_cols.last(), Some(&3));
        assert_eq!(vp.cursor, Some(vp.full_cols.len() - 1));
    }

    #[test]
    fn widths_stable_when_filter_toggles() {
        let mut tab = sample();
        toggle_pin(&mut tab, 2, "hvac");
        apply_row_filter(&mut tab, false);
        let preview = compute_viewport(&tab, 120, 3, false);

        set_filter_active(&mut tab, true);
        apply_row_filter(&mut tab, false);
        let active = compute_viewport(&tab, 120, 3, false);

        assert_eq!(active.cells.len(), 1);
        assert_eq!(preview.widths, active.widths);
    }

    #[test]
    fn magnitude_mode_rewrites_numeric_cells() {
        let tab = sample();
        let vp = compute_viewport(&tab, 120, 3, true);
        let costs: Vec<&str> = vp.cells.iter().map(|r| r[3].value.as_str()).collect();
        assert_eq!(costs, vec!["$ 1e2", "$ 1e1", "$ 1e3"]);
        assert_eq!(vp.cells[0][0].value, "1");
    }
}
