//! Rebuilding the displayed rows from the full rows and the pin state.

use tracing::debug;

use crate::model::Tab;
use crate::ops::pins::matches_all_pins;

pub fn set_filter_active(tab: &mut Tab, active: bool) {
    tab.filter_active = active;
}

pub fn set_filter_inverted(tab: &mut Tab, inverted: bool) {
    tab.filter_inverted = inverted;
}

/// Rebuild the displayed rows from the full snapshot.
///
/// With no pins every row is shown. With pins and an active filter, only
/// kept rows are shown. With pins in preview, every row is shown and the ones
/// the filter would drop are dimmed. Inversion swaps which side is kept.
pub fn apply_row_filter(tab: &mut Tab, mag_mode: bool) {
    let mut cell_rows = Vec::with_capacity(tab.full_cell_rows.len());
    let mut rows = Vec::with_capacity(tab.full_rows.len());

    for (cells, meta) in tab.full_cell_rows.iter().zip(&tab.full_rows) {
        if tab.pins.is_empty() {
            cell_rows.push(cells.clone());
            rows.push(meta.with_dimmed(false));
            continue;
        }
        let keep = matches_all_pins(cells, &tab.pins, mag_mode) != tab.filter_inverted;
        if tab.filter_active {
            if keep {
                cell_rows.push(cells.clone());
                rows.push(meta.with_dimmed(false));
            }
        } else {
            cell_rows.push(cells.clone());
            rows.push(meta.with_dimmed(!keep));
        }
    }

    tab.cell_rows = cell_rows;
    tab.rows = rows;
    tab.row_cursor = tab.row_cursor.min(tab.rows.len().saturating_sub(1));
    debug!(
        tab = tab.kind.label(),
        shown = tab.rows.len(),
        total = tab.full_rows.len(),
        active = tab.filter_active,
        inverted = tab.filter_inverted,
        "applied row filter"
    );
}
