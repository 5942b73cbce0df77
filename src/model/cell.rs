use serde::Serialize;

use super::column::CellKind;

/// One displayed value in the grid
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Cell {
    /// Display form
    pub value: String,
    pub kind: CellKind,
    /// The underlying datum is absent (distinct from an empty string)
    pub null: bool,
    /// Row ID in the linked tab; 0 = none
    pub link_id: u64,
}

impl Cell {
    pub fn new(value: impl Into<String>, kind: CellKind) -> Self {
        Cell {
            value: value.into(),
            kind,
            null: false,
            link_id: 0,
        }
    }

    pub fn null(kind: CellKind) -> Self {
        Cell {
            value: String::new(),
            kind,
            null: true,
            link_id: 0,
        }
    }

    /// A cell for an optional value; `None` becomes a null cell
    pub fn optional(value: Option<String>, kind: CellKind) -> Self {
        match value {
            Some(v) => Cell::new(v, kind),
            None => Cell::null(kind),
        }
    }

    pub fn with_link(mut self, link_id: u64) -> Self {
        self.link_id = link_id;
        self
    }
}

/// Per-row metadata, index-aligned with the row's cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RowMeta {
    pub id: u64,
    pub deleted: bool,
    /// Set in pin preview for rows the pins would drop
    pub dimmed: bool,
}

impl RowMeta {
    pub fn new(id: u64) -> Self {
        RowMeta {
            id,
            deleted: false,
            dimmed: false,
        }
    }

    pub fn with_dimmed(self, dimmed: bool) -> Self {
        RowMeta { dimmed, ..self }
    }
}
