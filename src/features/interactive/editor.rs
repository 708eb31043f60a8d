//! External editor round-trip for `tdo edit`.

use std::io::Write as _;
use std::process::Command;

use crate::error::TdoError;

/// Capability to hand a task line to the user and get the edited text
/// back.
pub trait Editor {
    /// Edit the given text, returning the replacement.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor cannot be run.
    fn edit(&self, text: &str) -> Result<String, TdoError>;
}

/// Editor that spawns an external command on a scratch file.
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    /// Resolve the editor command: config override, then `$EDITOR`,
    /// then `vi`.
    #[must_use]
    pub fn from_env(configured: Option<&str>) -> Self {
        let command = configured
            .map(str::to_string)
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| "vi".to_string());

        Self { command }
    }
}

impl Editor for ExternalEditor {
    fn edit(&self, text: &str) -> Result<String, TdoError> {
        let mut file = tempfile::Builder::new()
            .prefix("task.")
            .suffix(".txt")
            .tempfile()
            .map_err(|e| TdoError::Editor(format!("Failed to create scratch file: {e}")))?;

        file.write_all(text.as_bytes())
            .map_err(|e| TdoError::Editor(format!("Failed to write scratch file: {e}")))?;
        file.flush()
            .map_err(|e| TdoError::Editor(format!("Failed to write scratch file: {e}")))?;

        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| TdoError::Editor("Empty editor command".to_string()))?;

        let status = Command::new(program)
            .args(parts)
            .arg(file.path())
            .status()
            .map_err(|e| TdoError::Editor(format!("Failed to run {}: {e}", self.command)))?;

        if !status.success() {
            return Err(TdoError::Editor(format!(
                "{} exited with {status}",
                self.command
            )));
        }

        let edited = std::fs::read_to_string(file.path())
            .map_err(|e| TdoError::Editor(format!("Failed to read scratch file: {e}")))?;

        // A task is one line; fold any newlines the editor added
        Ok(edited.replace('\n', " ").trim_end().to_string())
    }
}
