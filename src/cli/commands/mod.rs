//! Command implementations for tdo.
//!
//! Every command loads the task file, operates on the in-memory list,
//! and returns its output as a string. Task numbers always refer to
//! the file's parse order; the `quick` view sorts a copy so numbering
//! stays stable.

mod add;
mod edit;
mod find;

pub use add::add;
pub use edit::edit;
pub use find::find;

use std::fmt::Write as _;

use chrono::{Duration, Local, NaiveDate};

use crate::cli::args::OutputFormat;
use crate::core::{parse_task, sort_by_date, Task};
use crate::error::TdoError;
use crate::output::{format_numbered_tasks, format_task_line, format_tasks};
use crate::storage::TaskFile;

/// List every task with its number.
///
/// # Errors
///
/// Returns an error if the task file cannot be read.
pub fn list(store: &TaskFile, format: OutputFormat) -> Result<String, TdoError> {
    let tasks = store.load()?;
    format_tasks(&tasks, format)
}

/// Show incomplete tasks due within a week of today, sorted by date.
///
/// A synthetic separator task due yesterday is injected before sorting,
/// so the listing splits between past and upcoming days. Printed
/// numbers are looked up in the unsorted list by content hash.
///
/// # Errors
///
/// Returns an error if the task file cannot be read.
pub fn quick(store: &TaskFile, format: OutputFormat) -> Result<String, TdoError> {
    let tasks = store.load()?;
    let entries = quick_entries(&tasks, Local::now().date_naive())?;
    format_numbered_tasks(&entries, format)
}

/// Mark the given task numbers complete or incomplete.
///
/// # Errors
///
/// Returns an error for bad task numbers or I/O failures.
pub fn mark(store: &TaskFile, numbers: &[String], complete: bool) -> Result<String, TdoError> {
    let mut tasks = store.load()?;
    let indices = resolve_numbers(numbers, tasks.len())?;

    store.backup_original()?;
    for &index in &indices {
        tasks[index].completed = complete;
    }
    store.save(&tasks)?;

    let state = if complete { "complete" } else { "incomplete" };
    let mut output = format!("Marked the following tasks as {state}:\n");
    append_numbered(&mut output, &tasks, &indices);

    Ok(output.trim_end().to_string())
}

/// Delete the given task numbers.
///
/// Deleted tasks keep their slot in memory so later numbers in the
/// same invocation still resolve, but they are omitted from the saved
/// file.
///
/// # Errors
///
/// Returns an error for bad task numbers or I/O failures.
pub fn remove(store: &TaskFile, numbers: &[String]) -> Result<String, TdoError> {
    let mut tasks = store.load()?;
    let indices = resolve_numbers(numbers, tasks.len())?;

    store.backup_original()?;
    for &index in &indices {
        tasks[index].deleted = true;
    }
    store.save(&tasks)?;

    let mut output = String::from("Removed the following tasks:\n");
    append_numbered(&mut output, &tasks, &indices);

    Ok(output.trim_end().to_string())
}

/// Move all completed tasks to the archive file.
///
/// # Errors
///
/// Returns an error if either file cannot be read or written.
pub fn archive(store: &TaskFile) -> Result<String, TdoError> {
    let tasks = store.load()?;
    let archive_store = store.archive();
    let mut archived = archive_store.load_or_empty()?;

    store.backup_original()?;

    let mut remaining = Vec::new();
    let mut output = String::from("Archived the following tasks:\n");

    for task in tasks {
        if task.completed {
            writeln!(output, "{task}").ok();
            archived.push(task);
        } else {
            remaining.push(task);
        }
    }

    archive_store.save(&archived)?;
    store.save(&remaining)?;

    Ok(output.trim_end().to_string())
}

/// Build the numbered entries for the quick view.
fn quick_entries(
    tasks: &[Task],
    today: NaiveDate,
) -> Result<Vec<(usize, Task)>, TdoError> {
    let lower = today - Duration::days(7);
    let upper = today + Duration::days(7);

    // The marker is due yesterday so tasks due today sort after it
    let marker = format!(
        "{} due:{}",
        "+=".repeat(40),
        (today - Duration::days(1)).format("%Y-%m-%d")
    );

    let mut all = tasks.to_vec();
    all.push(parse_task(&marker));

    let mut entries = Vec::new();
    for task in sort_by_date(&all) {
        let Some(due) = task.due_date else { continue };
        if task.completed || due <= lower || due > upper {
            continue;
        }

        // Recover the unsorted task number
        let number = all
            .iter()
            .position(|t| t.hash == task.hash)
            .ok_or_else(|| TdoError::TaskLookup(task.hash.clone()))?;

        entries.push((number + 1, task));
    }

    Ok(entries)
}

/// Resolve 1-based task number arguments to zero-based indices.
fn resolve_numbers(numbers: &[String], len: usize) -> Result<Vec<usize>, TdoError> {
    let mut indices = Vec::with_capacity(numbers.len());

    for raw in numbers {
        let number: usize = raw
            .parse()
            .map_err(|_| TdoError::InvalidNumber(raw.clone()))?;

        if number == 0 || number > len {
            return Err(TdoError::TaskNumber(number));
        }

        indices.push(number - 1);
    }

    Ok(indices)
}

fn append_numbered(output: &mut String, tasks: &[Task], indices: &[usize]) {
    for &index in indices {
        writeln!(output, "{}", format_task_line(index + 1, &tasks[index])).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_all;
    use tempfile::TempDir;

    fn store_with(dir: &TempDir, contents: &str) -> TaskFile {
        let store = TaskFile::new(dir.path().join("todo.txt"), false);
        std::fs::write(&store.path, contents).unwrap();
        store
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_numbers() {
        assert_eq!(
            resolve_numbers(&["1".to_string(), "3".to_string()], 3).unwrap(),
            vec![0, 2]
        );
        assert!(matches!(
            resolve_numbers(&["0".to_string()], 3),
            Err(TdoError::TaskNumber(0))
        ));
        assert!(matches!(
            resolve_numbers(&["4".to_string()], 3),
            Err(TdoError::TaskNumber(4))
        ));
        assert!(matches!(
            resolve_numbers(&["abc".to_string()], 3),
            Err(TdoError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_mark_done_and_undone() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, "first task\nsecond task\n");

        let output = mark(&store, &["2".to_string()], true).unwrap();
        assert!(output.contains("complete"));
        assert!(output.contains("002 x second task"));

        let tasks = store.load().unwrap();
        assert!(!tasks[0].completed);
        assert!(tasks[1].completed);

        mark(&store, &["2".to_string()], false).unwrap();
        assert!(!store.load().unwrap()[1].completed);
    }

    #[test]
    fn test_remove_drops_task_from_file() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, "first task\nsecond task\nthird task\n");

        remove(&store, &["2".to_string()]).unwrap();

        let tasks = store.load().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].description, "first task");
        assert_eq!(tasks[1].description, "third task");
    }

    #[test]
    fn test_archive_moves_completed_tasks() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, "x done task\nopen task\n");

        let output = archive(&store).unwrap();
        assert!(output.contains("x done task"));

        let remaining = store.load().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].description, "open task");

        let archived = store.archive().load().unwrap();
        assert_eq!(archived.len(), 1);
        assert!(archived[0].completed);
    }

    #[test]
    fn test_quick_entries_window_and_separator() {
        let today = date(2020, 8, 11);
        let tasks = parse_all(
            "past due:2020-08-06\n\
             too old due:2020-08-01\n\
             upcoming due:2020-08-14\n\
             too far due:2020-09-01\n\
             undated task\n\
             x finished due:2020-08-12\n\
             week out due:2020-08-18\n\
             week ago due:2020-08-04\n",
        );

        let entries = quick_entries(&tasks, today).unwrap();

        // past, separator, upcoming, week out; everything else filtered.
        // Exactly seven days ahead is in; exactly seven days back is out.
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].1.description, "past due:2020-08-06");
        assert_eq!(entries[0].0, 1);
        assert!(entries[1].1.is_separator());
        assert_eq!(entries[2].1.description, "upcoming due:2020-08-14");
        assert_eq!(entries[2].0, 3);
        assert_eq!(entries[3].1.description, "week out due:2020-08-18");
        assert_eq!(entries[3].0, 7);
    }

    #[test]
    fn test_quick_numbers_match_parse_order() {
        let today = date(2020, 8, 11);
        // Later line due earlier: sorts first but keeps number 2
        let tasks = parse_all("b due:2020-08-14\na due:2020-08-13\n");

        let entries = quick_entries(&tasks, today).unwrap();

        let numbered: Vec<(usize, &str)> = entries
            .iter()
            .filter(|(_, t)| !t.is_separator())
            .map(|(n, t)| (*n, t.description.as_str()))
            .collect();
        assert_eq!(
            numbered,
            [(2, "a due:2020-08-13"), (1, "b due:2020-08-14")]
        );
    }
}
