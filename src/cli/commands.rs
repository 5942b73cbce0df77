use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::TabKind;

#[derive(Parser)]
#[command(name = "micasa", about = concat!("micasa v", env!("CARGO_PKG_VERSION"), " - your house, in a grid"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./micasa.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Household data file (TOML); demo data when omitted
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Write logs here instead of the default log file
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Include deleted records
    #[arg(long, global = true)]
    pub deleted: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the grid layout of a tab for a given terminal width
    Layout(LayoutArgs),
    /// List tabs and their row counts
    Tabs,
}

#[derive(Args)]
pub struct LayoutArgs {
    /// Tab to lay out
    #[arg(long, default_value = "projects")]
    pub tab: TabKind,
    /// Terminal width in cells
    #[arg(long, default_value_t = 80)]
    pub width: usize,
    /// Hide a column by title or index (repeatable)
    #[arg(long)]
    pub hide: Vec<String>,
    /// Pin a value, as COLUMN=VALUE (repeatable; `∅` pins empty cells)
    #[arg(long)]
    pub pin: Vec<String>,
    /// Remove rows that don't match the pins instead of dimming them
    #[arg(long)]
    pub filter: bool,
    /// Invert the pin match
    #[arg(long)]
    pub invert: bool,
    /// Show numeric columns as orders of magnitude
    #[arg(long)]
    pub mag: bool,
    /// Put the column cursor on this column (title or index)
    #[arg(long)]
    pub cursor: Option<String>,
}
