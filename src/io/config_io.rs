use std::path::{Path, PathBuf};

use tracing::debug;

use crate::io::data_io::{LoadError, read_toml};
use crate::model::config::Config;

/// Config file looked for in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "micasa.toml";

/// Read the config. An explicit path must exist; without one, `micasa.toml`
/// in `cwd` is used if present, else defaults.
pub fn read_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config, LoadError> {
    let path: PathBuf = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let candidate = cwd.join(DEFAULT_CONFIG_FILE);
            if !candidate.exists() {
                debug!("no config file, using defaults");
                return Ok(Config::default());
            }
            candidate
        }
    };
    let config: Config = read_toml(&path)?;
    debug!(path = %path.display(), "read config");
    Ok(config)
}
