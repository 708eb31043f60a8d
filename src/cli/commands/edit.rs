//! Edit command implementation.

use std::fmt::Write as _;

use crate::core::parse_task;
use crate::error::TdoError;
use crate::features::interactive::Editor;
use crate::output::format_task_line;
use crate::storage::TaskFile;

/// Round-trip the given task numbers through the editor capability.
///
/// Each task's canonical text is handed to the editor and the result
/// re-parsed in place, so numbering is unaffected.
///
/// # Errors
///
/// Returns an error for bad task numbers, editor failures, or I/O
/// failures.
pub fn edit(
    store: &TaskFile,
    numbers: &[String],
    editor: &dyn Editor,
) -> Result<String, TdoError> {
    let mut tasks = store.load()?;
    let indices = super::resolve_numbers(numbers, tasks.len())?;

    store.backup_original()?;

    let mut output = String::from("Edited the following tasks:\n");
    for &index in &indices {
        let edited = editor.edit(&tasks[index].to_text())?;
        tasks[index] = parse_task(&edited);
        writeln!(output, "{}", format_task_line(index + 1, &tasks[index])).ok();
    }

    store.save(&tasks)?;

    Ok(output.trim_end().to_string())
}
