//! Task file persistence.
//!
//! One task per line in canonical form, newline-terminated. Logically
//! deleted tasks are omitted from written output. Mutating commands
//! copy the file to `<path>.bak` first unless backups are disabled.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::core::{parse_all, Task};
use crate::error::TdoError;

/// Handle to a todo.txt file on disk.
#[derive(Debug, Clone)]
pub struct TaskFile {
    /// Path to the task file.
    pub path: PathBuf,
    /// Whether to create a `.bak` copy before destructive writes.
    pub backup: bool,
}

impl TaskFile {
    /// Create a handle for the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, backup: bool) -> Self {
        Self {
            path: path.into(),
            backup,
        }
    }

    /// Load and parse all tasks from the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(&self) -> Result<Vec<Task>, TdoError> {
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(parse_all(&contents))
    }

    /// Load tasks, treating a missing file as an empty list.
    ///
    /// Used for the archive target, which may not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error for any I/O failure other than the file not
    /// existing.
    pub fn load_or_empty(&self) -> Result<Vec<Task>, TdoError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(parse_all(&contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(TdoError::Io(e)),
        }
    }

    /// Write all non-deleted tasks back in canonical form.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, tasks: &[Task]) -> Result<(), TdoError> {
        let mut contents = String::new();

        for task in tasks {
            if task.deleted {
                continue;
            }
            writeln!(contents, "{task}").ok();
        }

        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Copy the file to `<path>.bak` if backups are enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the original cannot be read or the backup
    /// cannot be written.
    pub fn backup_original(&self) -> Result<(), TdoError> {
        if !self.backup {
            return Ok(());
        }

        std::fs::copy(&self.path, self.backup_path())?;
        Ok(())
    }

    /// Path of the backup copy: `<path>.bak`.
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        append_to_file_name(&self.path, ".bak")
    }

    /// Path of the archive file: `todo.txt` becomes `todo-done.txt`.
    #[must_use]
    pub fn archive_path(&self) -> PathBuf {
        let name = self.path.to_string_lossy();
        name.strip_suffix(".txt").map_or_else(
            || append_to_file_name(&self.path, "-done.txt"),
            |stem| PathBuf::from(format!("{stem}-done.txt")),
        )
    }

    /// Handle to the archive file, sharing this file's backup setting.
    #[must_use]
    pub fn archive(&self) -> Self {
        Self::new(self.archive_path(), self.backup)
    }
}

fn append_to_file_name(path: &Path, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}{suffix}", path.to_string_lossy()))
}
