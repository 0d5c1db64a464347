use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::store::DEFAULT_FILE_NAME;

/// Optional settings file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "gpa-ledger.json";

/// Environment variable overriding the data file path.
pub const DATA_FILE_ENV: &str = "GPA_LEDGER_DATA";

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Spreadsheet holding the course list.
    pub data_file: PathBuf,
    /// Initial window size in points.
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_FILE_NAME),
            window_size: [1200.0, 800.0],
        }
    }
}

impl AppConfig {
    /// Read `gpa-ledger.json` from the working directory (if present) and
    /// apply the environment override.
    pub fn load() -> Result<Self> {
        let mut config = Self::from_file(Path::new(CONFIG_FILE_NAME))?;
        if let Some(path) = std::env::var_os(DATA_FILE_ENV) {
            config.data_file = PathBuf::from(path);
        }
        Ok(config)
    }

    /// Parse a config file; a missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.data_file, PathBuf::from("score.csv"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "data_file": "grades/2024.csv" }"#).unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.data_file, PathBuf::from("grades/2024.csv"));
        assert_eq!(config.window_size, [1200.0, 800.0]);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}
