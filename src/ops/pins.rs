//! Column-scoped value pins.
//!
//! A row matches when, for every pinned column, its value in that column is
//! one of the pinned values: AND across columns, OR within a column. Values
//! are compared by canonical key (trimmed, lower-cased), with null cells
//! keyed by [`NULL_PIN_KEY`] so they never match an empty string.

use tracing::debug;

use crate::model::{Cell, FilterPin, NULL_PIN_KEY, Tab, canonical};
use crate::ops::magnitude::display_value;

/// Pin key for a cell as currently displayed
pub fn cell_key(cell: &Cell, mag_mode: bool) -> String {
    if cell.null {
        NULL_PIN_KEY.to_string()
    } else {
        canonical(&display_value(cell, mag_mode))
    }
}

fn key_for(value: &str) -> String {
    if value == NULL_PIN_KEY {
        value.to_string()
    } else {
        canonical(value)
    }
}

/// Pin or unpin `value` on full column `col`. Returns whether the value is
/// pinned afterwards. Unpinning the last value removes the pin entirely.
pub fn toggle_pin(tab: &mut Tab, col: usize, value: &str) -> bool {
    let key = key_for(value);
    let pinned = match tab.pins.iter().position(|p| p.col == col) {
        Some(idx) => {
            let pin = &mut tab.pins[idx];
            if pin.values.shift_remove(&key) {
                if pin.values.is_empty() {
                    tab.pins.remove(idx);
                }
                false
            } else {
                pin.values.insert(key);
                true
            }
        }
        None => {
            tab.pins.push(FilterPin::new(col, key));
            true
        }
    };
    debug!(col, value, pinned, pins = tab.pins.len(), "toggled pin");
    pinned
}

/// Drop every pin and leave filter mode
pub fn clear_pins(tab: &mut Tab) {
    tab.pins.clear();
    tab.filter_active = false;
    tab.filter_inverted = false;
}

/// Drop the pin on `col`. Leaves filter mode if no pins remain.
pub fn clear_pins_for_column(tab: &mut Tab, col: usize) {
    tab.pins.retain(|p| p.col != col);
    if tab.pins.is_empty() {
        tab.filter_active = false;
        tab.filter_inverted = false;
    }
}

pub fn is_pinned(tab: &Tab, col: usize, value: &str) -> bool {
    let key = key_for(value);
    tab.pins
        .iter()
        .any(|p| p.col == col && p.values.contains(&key))
}

pub fn has_pins(tab: &Tab) -> bool {
    !tab.pins.is_empty()
}

pub fn has_column_pins(tab: &Tab, col: usize) -> bool {
    tab.pins.iter().any(|p| p.col == col)
}

/// Whether a full-width row satisfies every pin. A pin on a column the row
/// doesn't have never matches.
pub fn matches_all_pins(row: &[Cell], pins: &[FilterPin], mag_mode: bool) -> bool {
    pins.iter().all(|pin| {
        row.get(pin.col)
            .is_some_and(|cell| pin.values.contains(&cell_key(cell, mag_mode)))
    })
}

/// `Status: planned, quoted · Vendor: ∅` in pin and value order
pub fn pin_summary(tab: &Tab) -> String {
    tab.pins
        .iter()
        .map(|pin| {
            let title = tab
                .specs
                .get(pin.col)
                .map(|s| s.title.as_str())
                .unwrap_or("?");
            let values: Vec<&str> = pin
                .values
                .iter()
                .map(|v| if v == NULL_PIN_KEY { "∅" } else { v.as_str() })
                .collect();
            format!("{}: {}", title, values.join(", "))
        })
        .collect::<Vec<_>>()
        .join(" · ")
}
