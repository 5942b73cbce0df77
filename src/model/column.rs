use serde::{Deserialize, Serialize};

use super::tab::TabKind;

/// Horizontal alignment of a column's cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Semantic type of the values in a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    #[default]
    Text,
    /// Row identifier
    Id,
    /// Dollar amount like `$1,250.00`
    Money,
    /// Whole number (counts, intervals)
    Integer,
    /// ISO date `2025-05-14`
    Date,
    /// Enumerated status value
    Status,
    /// Count of child records that can be drilled into
    Drilldown,
}

impl CellKind {
    /// Whether values of this kind have an order-of-magnitude form
    pub fn is_numeric(self) -> bool {
        matches!(self, CellKind::Money | CellKind::Integer)
    }
}

/// A column whose cells point at rows of another tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLink {
    pub target: TabKind,
}

/// Glyph appended to the header of a column that links to another tab
pub const LINK_GLYPH: &str = " →";
/// Glyph appended to the header of a drilldown column
pub const DRILL_GLYPH: &str = " ↘";

/// Static layout constraints and metadata for one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub title: String,
    /// Width floor
    pub min: usize,
    /// Width ceiling; 0 means unbounded
    pub max: usize,
    /// Absorbs spare width first and shrinks first
    pub flex: bool,
    pub align: Align,
    pub kind: CellKind,
    pub link: Option<ColumnLink>,
    /// Every legal value, measured even when not currently displayed
    pub fixed_values: Vec<String>,
    /// 0 = visible; larger = hidden more recently
    pub hide_order: u32,
}

impl ColumnSpec {
    pub fn new(title: impl Into<String>, kind: CellKind) -> Self {
        ColumnSpec {
            title: title.into(),
            min: 1,
            max: 0,
            flex: false,
            align: Align::Left,
            kind,
            link: None,
            fixed_values: Vec::new(),
            hide_order: 0,
        }
    }

    pub fn min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    pub fn flex(mut self) -> Self {
        self.flex = true;
        self
    }

    pub fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    pub fn link(mut self, target: TabKind) -> Self {
        self.link = Some(ColumnLink { target });
        self
    }

    pub fn fixed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fixed_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.hide_order > 0
    }

    /// Header text as drawn, including any link or drilldown glyph
    pub fn header(&self) -> String {
        if self.link.is_some() {
            format!("{}{}", self.title, LINK_GLYPH)
        } else if self.kind == CellKind::Drilldown {
            format!("{}{}", self.title, DRILL_GLYPH)
        } else {
            self.title.clone()
        }
    }
}
