//! Projecting away hidden columns.

use crate::model::{Cell, ColumnSpec, SortEntry};

/// The columns left after hiding, with everything downstream needs to map
/// back to full column indices.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleProjection {
    pub specs: Vec<ColumnSpec>,
    /// Per row, only the visible columns, in order
    pub cells: Vec<Vec<Cell>>,
    /// Cursor in visible space; `None` when the cursor's column is hidden
    pub cursor: Option<usize>,
    /// Sorts on visible columns, re-indexed into visible space
    pub sorts: Vec<SortEntry>,
    /// Visible index → full index, strictly increasing
    pub vis_to_full: Vec<usize>,
}

/// Full indices of the visible columns, in order
pub fn visible_indices(specs: &[ColumnSpec]) -> Vec<usize> {
    specs
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.is_hidden())
        .map(|(i, _)| i)
        .collect()
}

/// Keep only the cells at `vis_to_full`. Short rows yield short output.
pub fn project_cells(rows: &[Vec<Cell>], vis_to_full: &[usize]) -> Vec<Vec<Cell>> {
    rows.iter()
        .map(|row| {
            vis_to_full
                .iter()
                .filter_map(|&full| row.get(full).cloned())
                .collect()
        })
        .collect()
}

/// Position of `full` in the visible projection
pub fn full_to_visible(vis_to_full: &[usize], full: usize) -> Option<usize> {
    vis_to_full.binary_search(&full).ok()
}

/// Strip hidden columns from specs and rows, remapping the cursor and sorts.
pub fn project(
    specs: &[ColumnSpec],
    rows: &[Vec<Cell>],
    cursor: usize,
    sorts: &[SortEntry],
) -> VisibleProjection {
    let vis_to_full = visible_indices(specs);
    let visible_specs = vis_to_full.iter().map(|&i| specs[i].clone()).collect();
    let cells = project_cells(rows, &vis_to_full);
    let visible_sorts = sorts
        .iter()
        .filter_map(|s| {
            full_to_visible(&vis_to_full, s.col).map(|col| SortEntry { col, dir: s.dir })
        })
        .collect();

    VisibleProjection {
        specs: visible_specs,
        cells,
        cursor: full_to_visible(&vis_to_full, cursor),
        sorts: visible_sorts,
        vis_to_full,
    }
}
