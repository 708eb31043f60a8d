//! Output formatting for tdo.
//!
//! Listings are numbered with the 1-based parse order, which is the
//! number every other command accepts. Sorted views carry their own
//! numbers, looked up in the unsorted list.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::Task;
use crate::error::TdoError;

pub use json::{format_numbered_json, format_tasks_json};
pub use pretty::{format_task_line, format_tasks_pretty};

/// Format a task list numbered by position.
///
/// # Errors
///
/// Returns `TdoError::Json` if JSON serialization fails.
pub fn format_tasks(tasks: &[Task], format: OutputFormat) -> Result<String, TdoError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks)),
        OutputFormat::Json => format_tasks_json(tasks),
    }
}

/// Format tasks that carry explicit numbers (sorted views).
///
/// # Errors
///
/// Returns `TdoError::Json` if JSON serialization fails.
pub fn format_numbered_tasks(
    entries: &[(usize, Task)],
    format: OutputFormat,
) -> Result<String, TdoError> {
    match format {
        OutputFormat::Pretty => {
            let mut output = String::new();
            for (number, task) in entries {
                output.push_str(&pretty::format_task_line(*number, task));
                output.push('\n');
            }
            Ok(output)
        },
        OutputFormat::Json => format_numbered_json(entries),
    }
}
