use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::model::Align;

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.split('\t')
        .enumerate()
        .map(|(i, part)| {
            let w = UnicodeWidthStr::width(part);
            if i > 0 { w + 4 } else { w }
        })
        .sum()
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = grapheme_display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Truncate or pad `s` to exactly `width` cells.
pub fn fit_to_width(s: &str, width: usize, align: Align) -> String {
    let clipped = truncate_to_width(s, width);
    let pad = width.saturating_sub(display_width(&clipped));
    match align {
        Align::Left => format!("{}{}", clipped, " ".repeat(pad)),
        Align::Right => format!("{}{}", " ".repeat(pad), clipped),
    }
}

fn grapheme_display_width(g: &str) -> usize {
    if g == "\t" {
        return 4;
    }
    UnicodeWidthStr::width(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
    }

    #[test]
    fn display_width_cjk() {
        assert_eq!(display_width("你好"), 4);
    }

    #[test]
    fn display_width_glyphs() {
        assert_eq!(display_width("Quotes ↘"), 8);
        assert_eq!(display_width("Project →"), 9);
    }

    #[test]
    fn display_width_combining() {
        assert_eq!(display_width("cafe\u{0301}"), 4);
    }

    #[test]
    fn truncate_no_op_when_fits() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn truncate_wide_chars() {
        // Each CJK char is 2 wide; budget 4 after reserving the ellipsis
        assert_eq!(truncate_to_width("你好世界", 5), "你好…");
    }

    #[test]
    fn truncate_tiny_budgets() {
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("hello", 1), "…");
    }

    #[test]
    fn fit_pads_by_alignment() {
        assert_eq!(fit_to_width("ab", 4, Align::Left), "ab  ");
        assert_eq!(fit_to_width("ab", 4, Align::Right), "  ab");
        assert_eq!(fit_to_width("abcdef", 4, Align::Right), "abc…");
    }
}
