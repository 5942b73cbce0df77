use serde::Serialize;

use crate::model::{Align, SortDir, TabKind};
use crate::ops::viewport::{Separator, Viewport};
use crate::ops::window::ScrollWindow;
use crate::util::unicode::{display_width, fit_to_width};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ColumnJson {
    pub title: String,
    /// Column index in the tab, counting hidden columns
    pub index: usize,
    pub width: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortDir>,
}

#[derive(Serialize)]
pub struct RowJson {
    pub id: u64,
    pub cells: Vec<Option<String>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub dimmed: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub deleted: bool,
}

#[derive(Serialize)]
pub struct LayoutJson {
    pub tab: TabKind,
    pub width: usize,
    pub visible_columns: usize,
    pub window: ScrollWindow,
    pub cursor: Option<usize>,
    pub columns: Vec<ColumnJson>,
    pub separators: Vec<Separator>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pins: String,
    pub rows: Vec<RowJson>,
}

#[derive(Serialize)]
pub struct TabJson {
    pub tab: TabKind,
    pub label: &'static str,
    pub rows: usize,
    pub columns: usize,
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// Separator strings used when drawing a viewport as text
pub struct SeparatorStyle<'a> {
    pub plain: &'a str,
    pub gap: &'a str,
}

/// One grid line: scroll indicators, then each window column fitted to its
/// width and joined by the separator for that pair.
pub fn grid_line(
    vp: &Viewport,
    texts: &[String],
    seps: &SeparatorStyle,
    term_width: usize,
) -> String {
    let mut out = String::new();
    if vp.window.has_left {
        out.push_str("◀ ");
    }
    for (i, (text, &width)) in texts.iter().zip(&vp.widths).enumerate() {
        if i > 0 {
            out.push_str(match vp.separators.get(i - 1) {
                Some(Separator::Gap) => seps.gap,
                _ => seps.plain,
            });
        }
        let align = vp.specs.get(i).map_or(Align::Left, |s| s.align);
        out.push_str(&fit_to_width(text, width, align));
    }
    if vp.window.has_right {
        let used = display_width(&out);
        let pad = term_width.saturating_sub(used + 1);
        out.push_str(&" ".repeat(pad));
        out.push('▶');
    }
    out.trim_end().to_string()
}

/// Header and rows of a viewport, one string per line
pub fn format_viewport(vp: &Viewport, seps: &SeparatorStyle, term_width: usize) -> Vec<String> {
    let headers: Vec<String> = vp.specs.iter().map(|s| s.header()).collect();
    let mut lines = vec![grid_line(vp, &headers, seps, term_width)];
    for row in &vp.cells {
        let texts: Vec<String> = row.iter().map(|c| c.value.clone()).collect();
        lines.push(grid_line(vp, &texts, seps, term_width));
    }
    lines
}
