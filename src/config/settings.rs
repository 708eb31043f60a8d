//! Configuration settings for tdo.
//!
//! Settings are loaded from `~/.tdo/config.yaml`.

use std::path::PathBuf;

use serde::Deserialize;

use crate::config::Paths;
use crate::error::TdoError;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default task file, used when `-f` is not given.
    pub file: Option<PathBuf>,
    /// Whether to copy the task file to `<file>.bak` before writes.
    #[serde(default = "default_backup")]
    pub backup: bool,
    /// Editor command for `tdo edit`; falls back to `$EDITOR`.
    #[serde(default)]
    pub editor: Option<String>,
}

const fn default_backup() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: None,
            backup: default_backup(),
            editor: None,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, TdoError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TdoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TdoError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TdoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}
