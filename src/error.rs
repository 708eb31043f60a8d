//! Error types for tdo.

use thiserror::Error;

/// Errors surfaced by tdo operations.
///
/// Task parsing itself never fails: malformed tokens are left in the
/// description. Errors come from the surrounding I/O and interactive
/// layers.
#[derive(Debug, Error)]
pub enum TdoError {
    /// Reading or writing the task file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Loading or saving the configuration failed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A task number argument was not a positive integer.
    #[error("invalid task number: {0}")]
    InvalidNumber(String),

    /// A task number was outside the list.
    #[error("no task with number {0}")]
    TaskNumber(usize),

    /// No task matched the given content hash.
    #[error("no task with identifier {0}")]
    TaskLookup(String),

    /// The external editor could not be run or returned failure.
    #[error("editor error: {0}")]
    Editor(String),

    /// The fuzzy picker could not be started.
    #[error("picker error: {0}")]
    Picker(String),

    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// `add` was invoked without any task text.
    #[error("you must specify a task")]
    EmptyTask,
}
