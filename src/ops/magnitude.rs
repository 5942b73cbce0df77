//! Order-of-magnitude display for numeric cells, and re-keying pins when the
//! display mode flips.

use std::borrow::Cow;

use indexmap::IndexSet;
use tracing::debug;

use crate::model::{Cell, CellKind, NULL_PIN_KEY, Tab, canonical};

/// Numeric value of a money or integer display string (`$1,250.00` → 1250.0)
pub fn parse_number(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Magnitude bucket of a numeric cell: `$ 1e3` for $1,000.00 through
/// $3,162.27, `1e1` for 12. `None` for null cells, non-numeric kinds, and
/// values that don't parse.
pub fn bucket(cell: &Cell) -> Option<String> {
    if cell.null || !cell.kind.is_numeric() {
        return None;
    }
    let v = parse_number(&cell.value)?;
    let prefix = if cell.kind == CellKind::Money { "$ " } else { "" };
    if v == 0.0 {
        return Some(format!("{}0", prefix));
    }
    let sign = if v < 0.0 { "-" } else { "" };
    let exp = v.abs().log10().round() as i32;
    Some(format!("{}{}1e{}", prefix, sign, exp))
}

/// What a cell shows in the given mode
pub fn display_value(cell: &Cell, mag_mode: bool) -> Cow<'_, str> {
    if mag_mode
        && let Some(b) = bucket(cell)
    {
        return Cow::Owned(b);
    }
    Cow::Borrowed(cell.value.as_str())
}

/// Rows with every cell replaced by its display value for the mode
pub fn display_rows(rows: &[Vec<Cell>], mag_mode: bool) -> Vec<Vec<Cell>> {
    if !mag_mode {
        return rows.to_vec();
    }
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| Cell {
                    value: display_value(cell, true).into_owned(),
                    ..cell.clone()
                })
                .collect()
        })
        .collect()
}

/// Re-key every pin for the new display mode.
///
/// Keys are re-derived from the full unfiltered rows rather than converted
/// directly, since several raw values share one bucket. Going to magnitude
/// and back can therefore widen a pin: `$1,000.00` becomes `$ 1e3`, which
/// comes back as every raw value in that bucket. A pin whose new key set
/// would be empty is left untouched.
pub fn translate_pins(tab: &mut Tab, to_mag_mode: bool) {
    let from_mag_mode = !to_mag_mode;
    for pin in &mut tab.pins {
        let mut translated = IndexSet::new();
        for row in &tab.full_cell_rows {
            let Some(cell) = row.get(pin.col) else {
                continue;
            };
            if cell.null {
                continue;
            }
            let from = canonical(&display_value(cell, from_mag_mode));
            if pin.values.contains(&from) {
                translated.insert(canonical(&display_value(cell, to_mag_mode)));
            }
        }
        if pin.values.contains(NULL_PIN_KEY) {
            translated.insert(NULL_PIN_KEY.to_string());
        }
        if !translated.is_empty() {
            debug!(
                col = pin.col,
                from = pin.values.len(),
                to = translated.len(),
                to_mag_mode,
                "translated pin"
            );
            pin.values = translated;
        }
    }
}
