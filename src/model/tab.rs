use serde::{Deserialize, Serialize};

use super::cell::{Cell, RowMeta};
use super::column::ColumnSpec;
use super::pin::FilterPin;

/// Which entity a tab lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabKind {
    Projects,
    Quotes,
    Maintenance,
    Vendors,
}

impl TabKind {
    pub const ALL: [TabKind; 4] = [
        TabKind::Projects,
        TabKind::Quotes,
        TabKind::Maintenance,
        TabKind::Vendors,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TabKind::Projects => "Projects",
            TabKind::Quotes => "Quotes",
            TabKind::Maintenance => "Maintenance",
            TabKind::Vendors => "Vendors",
        }
    }

    pub fn next(self) -> TabKind {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> TabKind {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::str::FromStr for TabKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "projects" | "project" => Ok(TabKind::Projects),
            "quotes" | "quote" => Ok(TabKind::Quotes),
            "maintenance" | "maint" => Ok(TabKind::Maintenance),
            "vendors" | "vendor" => Ok(TabKind::Vendors),
            other => Err(format!("unknown tab '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

/// One sort key. Earlier entries in a sort list take priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortEntry {
    /// Full column index
    pub col: usize,
    pub dir: SortDir,
}

/// All grid state for one entity tab.
///
/// Owned by the event loop; each key press or reload mutates it once and the
/// next render recomputes everything derived from it.
#[derive(Debug, Clone)]
pub struct Tab {
    pub kind: TabKind,
    pub specs: Vec<ColumnSpec>,
    /// Unfiltered snapshot from the last reload
    pub full_cell_rows: Vec<Vec<Cell>>,
    pub full_rows: Vec<RowMeta>,
    /// Displayed rows after pins are applied
    pub cell_rows: Vec<Vec<Cell>>,
    pub rows: Vec<RowMeta>,
    pub pins: Vec<FilterPin>,
    pub filter_active: bool,
    pub filter_inverted: bool,
    /// Full column index
    pub col_cursor: usize,
    pub row_cursor: usize,
    /// Visible-index hint for the first column of the scroll window
    pub view_offset: usize,
    pub sorts: Vec<SortEntry>,
    /// Last hide order handed out
    pub(crate) hide_seq: u32,
}

impl Tab {
    pub fn new(kind: TabKind, specs: Vec<ColumnSpec>) -> Self {
        let hide_seq = specs.iter().map(|s| s.hide_order).max().unwrap_or(0);
        Tab {
            kind,
            specs,
            full_cell_rows: Vec::new(),
            full_rows: Vec::new(),
            cell_rows: Vec::new(),
            rows: Vec::new(),
            pins: Vec::new(),
            filter_active: false,
            filter_inverted: false,
            col_cursor: 0,
            row_cursor: 0,
            view_offset: 0,
            sorts: Vec::new(),
            hide_seq,
        }
    }

    /// Replace the unfiltered snapshot. The displayed rows mirror it until a
    /// row filter is applied.
    pub fn load(&mut self, cells: Vec<Vec<Cell>>, meta: Vec<RowMeta>) {
        debug_assert_eq!(cells.len(), meta.len());
        self.cell_rows = cells.clone();
        self.rows = meta.clone();
        self.full_cell_rows = cells;
        self.full_rows = meta;
        self.row_cursor = self.row_cursor.min(self.rows.len().saturating_sub(1));
    }

    /// Next never-before-used hide order
    pub(crate) fn next_hide_order(&mut self) -> u32 {
        self.hide_seq += 1;
        self.hide_seq
    }

    pub fn visible_column_count(&self) -> usize {
        self.specs.iter().filter(|s| !s.is_hidden()).count()
    }

    /// Cell under the cursor in the displayed rows
    pub fn cursor_cell(&self) -> Option<&Cell> {
        self.cell_rows.get(self.row_cursor)?.get(self.col_cursor)
    }
}
