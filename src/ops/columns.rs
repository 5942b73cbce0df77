//! Hiding, restoring and moving between columns.

use tracing::info;

use crate::model::Tab;
use crate::ops::pins::clear_pins_for_column;
use crate::ops::visibility::visible_indices;

/// Error type for column commands
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColumnError {
    #[error("column {col} out of range ({len} columns)")]
    OutOfRange { col: usize, len: usize },
    #[error("can't hide the last visible column")]
    LastVisibleColumn,
}

/// Hide full column `col`. Its pins are dropped and the cursor moves off it,
/// preferring the next visible column to the right.
pub fn hide_column(tab: &mut Tab, col: usize) -> Result<(), ColumnError> {
    let len = tab.specs.len();
    if col >= len {
        return Err(ColumnError::OutOfRange { col, len });
    }
    if tab.specs[col].is_hidden() {
        return Ok(());
    }
    if tab.visible_column_count() <= 1 {
        return Err(ColumnError::LastVisibleColumn);
    }

    let order = tab.next_hide_order();
    tab.specs[col].hide_order = order;
    clear_pins_for_column(tab, col);
    info!(column = %tab.specs[col].title, order, "hid column");

    if tab.col_cursor == col {
        tab.col_cursor = nearest_visible(tab, col).unwrap_or(0);
    }
    Ok(())
}

/// Make every column visible again
pub fn show_all_columns(tab: &mut Tab) {
    for spec in &mut tab.specs {
        spec.hide_order = 0;
    }
    info!(tab = tab.kind.label(), "showed all columns");
}

/// Show the most recently hidden column and put the cursor on it
pub fn unhide_last(tab: &mut Tab) -> Option<usize> {
    let (idx, _) = tab
        .specs
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_hidden())
        .max_by_key(|(_, s)| s.hide_order)?;
    tab.specs[idx].hide_order = 0;
    tab.col_cursor = idx;
    Some(idx)
}

/// Move the column cursor `delta` visible columns, stopping at the edges
pub fn move_column_cursor(tab: &mut Tab, delta: isize) {
    let visible = visible_indices(&tab.specs);
    if visible.is_empty() {
        return;
    }
    let pos = match visible.binary_search(&tab.col_cursor) {
        Ok(p) => p,
        // Cursor sits on a hidden column: treat it as between neighbors
        Err(p) if delta > 0 => p.saturating_sub(1),
        Err(p) => p.min(visible.len() - 1),
    };
    let target = (pos as isize + delta).clamp(0, visible.len() as isize - 1) as usize;
    tab.col_cursor = visible[target];
}

pub fn first_column(tab: &mut Tab) {
    if let Some(&first) = visible_indices(&tab.specs).first() {
        tab.col_cursor = first;
    }
}

pub fn last_column(tab: &mut Tab) {
    if let Some(&last) = visible_indices(&tab.specs).last() {
        tab.col_cursor = last;
    }
}

fn nearest_visible(tab: &Tab, col: usize) -> Option<usize> {
    let visible = visible_indices(&tab.specs);
    visible
        .iter()
        .copied()
        .find(|&i| i > col)
        .or_else(|| visible.iter().copied().rev().find(|&i| i < col))
}
