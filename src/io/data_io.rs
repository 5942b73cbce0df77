use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::model::household::Household;

/// Error type for loading config and data files
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read and deserialize a TOML file
pub(crate) fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load household records from a TOML data file.
///
/// The file holds `[[projects]]`, `[[quotes]]`, `[[maintenance]]` and
/// `[[vendors]]` tables; any of them may be absent.
pub fn load_household(path: &Path) -> Result<Household, LoadError> {
    let household: Household = read_toml(path)?;
    info!(
        path = %path.display(),
        projects = household.projects.len(),
        quotes = household.quotes.len(),
        maintenance = household.maintenance.len(),
        vendors = household.vendors.len(),
        "loaded household data"
    );
    Ok(household)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectStatus;
    use tempfile::TempDir;

    #[test]
    fn load_household_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("house.toml");
        fs::write(
            &path,
            r#"
[[projects]]
id = 1
title = "Deck stain"
status = "underway"
budget = 45000
start = "2025-06-01"

[[vendors]]
id = 1
name = "Stain Bros"
"#,
        )
        .unwrap();

        let h = load_household(&path).unwrap();
        assert_eq!(h.projects.len(), 1);
        assert_eq!(h.projects[0].status, ProjectStatus::Underway);
        assert_eq!(h.projects[0].budget, Some(45_000));
        assert!(h.projects[0].end.is_none());
        assert_eq!(h.vendors[0].name, "Stain Bros");
        assert!(h.quotes.is_empty());
    }

    #[test]
    fn missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_household(&tmp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn bad_status_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(
            &path,
            "[[projects]]\nid = 1\ntitle = \"x\"\nstatus = \"someday\"\n",
        )
        .unwrap();
        let err = load_household(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().starts_with("could not parse"));
    }
}
