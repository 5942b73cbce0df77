use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::tab::TabKind;

/// Configuration from micasa.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Drawn between adjacent columns
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Drawn between two visible columns that have hidden columns between them
    #[serde(default = "default_gap_separator")]
    pub gap_separator: String,
    /// Start with numeric cells shown as orders of magnitude
    #[serde(default)]
    pub magnitude: bool,
    #[serde(default)]
    pub show_deleted: bool,
    #[serde(default)]
    pub default_tab: Option<TabKind>,
    /// Theme overrides, e.g. `dim = "#7D78BF"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            separator: default_separator(),
            gap_separator: default_gap_separator(),
            magnitude: false,
            show_deleted: false,
            default_tab: None,
            colors: HashMap::new(),
        }
    }
}

fn default_separator() -> String {
    " │ ".to_string()
}

fn default_gap_separator() -> String {
    " ⋯ ".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// tracing level filter; RUST_LOG overrides
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_level(),
            file: None,
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}
