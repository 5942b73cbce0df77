use indexmap::IndexSet;
use serde::Serialize;

/// Pin key standing for a null cell. Cannot collide with a canonicalized
/// display value since those never contain NUL.
pub const NULL_PIN_KEY: &str = "\u{0}null";

/// Canonical pin key for a display value: trimmed and lower-cased
pub fn canonical(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Pinned values on one column. Rows match when their value for `col`
/// is any member of `values`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterPin {
    /// Index into the full (not visible) column list
    pub col: usize,
    /// Canonical keys in the order they were pinned; never empty
    pub values: IndexSet<String>,
}

impl FilterPin {
    pub fn new(col: usize, key: String) -> Self {
        let mut values = IndexSet::new();
        values.insert(key);
        FilterPin { col, values }
    }
}
