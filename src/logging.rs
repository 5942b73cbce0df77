use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_FILE: &str = "micasa.log";

/// Log file used when neither the CLI nor the config names one
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

/// Parse a level name, falling back to WARN
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::WARN)
}

/// Send tracing output to `path`. The terminal belongs to the TUI, so
/// nothing is ever written to stdout or stderr. `RUST_LOG` overrides `level`.
pub fn init(path: &Path, level: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(parse_level(level).into())
        .from_env_lossy();

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(file_layer).try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse() {
        assert_eq!(parse_level("debug"), LevelFilter::DEBUG);
        assert_eq!(parse_level(" INFO "), LevelFilter::INFO);
        assert_eq!(parse_level("chatty"), LevelFilter::WARN);
    }

    #[test]
    fn default_path_is_in_temp_dir() {
        assert!(default_log_path().ends_with(LOG_FILE));
    }
}
