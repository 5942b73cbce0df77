//! Horizontal scrolling: which visible columns fit on screen.

use serde::Serialize;

/// Cells reserved for a `◀` or `▶` scroll indicator
pub const INDICATOR_WIDTH: usize = 2;

/// The contiguous run of visible columns that fits on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollWindow {
    /// First visible column in the window
    pub start: usize,
    /// One past the last visible column in the window
    pub end: usize,
    /// Columns exist to the left of `start`
    pub has_left: bool,
    /// Columns exist at or after `end`
    pub has_right: bool,
}

impl ScrollWindow {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, col: usize) -> bool {
        col >= self.start && col < self.end
    }
}

/// Cheap pre-adjustment of the persisted offset so it never starts past the
/// cursor. Only a hint: `compute_window` decides what actually fits.
pub fn ensure_cursor_visible(offset: usize, cursor: usize) -> usize {
    offset.min(cursor)
}

/// Choose which visible columns to draw.
///
/// Starts from `offset` and packs columns left to right. When the cursor would
/// fall off the right edge, the window slides right one column at a time until
/// it is inside.
pub fn compute_window(
    widths: &[usize],
    sep: usize,
    term_width: usize,
    offset: usize,
    cursor: Option<usize>,
) -> ScrollWindow {
    let n = widths.len();
    if n == 0 {
        return ScrollWindow {
            start: 0,
            end: 0,
            has_left: false,
            has_right: false,
        };
    }

    let total = widths.iter().sum::<usize>() + sep * (n - 1);
    if total <= term_width {
        return ScrollWindow {
            start: 0,
            end: n,
            has_left: false,
            has_right: false,
        };
    }

    let cursor = cursor.map(|c| c.min(n - 1));
    let mut start = offset.min(n - 1);
    if let Some(c) = cursor {
        start = ensure_cursor_visible(start, c);
    }

    let mut end = fill_right(widths, sep, term_width, start);
    if let Some(c) = cursor {
        while c >= end && start + 1 < n {
            start += 1;
            end = fill_right(widths, sep, term_width, start);
        }
    }

    ScrollWindow {
        start,
        end,
        has_left: start > 0,
        has_right: end < n,
    }
}

/// Right edge of a window starting at `start`. The first column is always
/// included, even when it alone overflows.
fn fill_right(widths: &[usize], sep: usize, term_width: usize, start: usize) -> usize {
    let n = widths.len();
    let budget = if start > 0 {
        term_width.saturating_sub(INDICATOR_WIDTH)
    } else {
        term_width
    };

    let mut used = 0;
    let mut end = start;
    for (i, &w) in widths.iter().enumerate().skip(start) {
        let need = if i > start { w + sep } else { w };
        if i > start && used + need > budget {
            break;
        }
        used += need;
        end = i + 1;
    }

    let has_right = end < n;
    if has_right && budget.saturating_sub(used) < INDICATOR_WIDTH && end - start > 1 {
        end -= 1;
    }
    end
}
