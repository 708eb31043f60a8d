//! Path resolution for tdo configuration.
//!
//! All tdo configuration lives in `~/.tdo/`:
//! - `config.yaml` - Main configuration file
//!
//! The task file itself lives wherever the user keeps it; its location
//! comes from the CLI, the environment, or the config file.

use std::path::PathBuf;

use crate::error::TdoError;

/// Paths to tdo configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tdo/`
    pub root: PathBuf,
    /// Config file: `~/.tdo/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TdoError> {
        let home = std::env::var("HOME")
            .map_err(|_| TdoError::Config("Could not determine home directory".to_string()))?;

        let root = PathBuf::from(home).join(".tdo");

        Ok(Self {
            config_file: root.join("config.yaml"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

}
