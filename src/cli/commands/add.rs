//! Add command implementation.

use colored::Colorize;

use chrono::Local;

use crate::core::{parse_task, rewrite_relative_dates};
use crate::error::TdoError;
use crate::output::format_task_line;
use crate::storage::TaskFile;

/// Add a new task from free text.
///
/// Relative due dates (`due:today`, `due:fri`) are rewritten against
/// today's date before parsing, and today is stamped as the creation
/// date.
///
/// # Errors
///
/// Returns `TdoError::EmptyTask` for blank input, or an I/O error if
/// the task file cannot be read or written.
pub fn add(store: &TaskFile, text: &[String]) -> Result<String, TdoError> {
    let raw = text.join(" ");
    if raw.trim().is_empty() {
        return Err(TdoError::EmptyTask);
    }

    let today = Local::now().date_naive();
    let rewritten = rewrite_relative_dates(&raw, today);

    let mut output = String::new();
    if rewritten != raw {
        output.push_str(&format!(
            "{} \"{raw}\" -> \"{rewritten}\"\n",
            "Rewrote task:".dimmed()
        ));
    }

    let mut task = parse_task(&rewritten);
    task.stamp_creation_date(today);

    let mut tasks = store.load()?;
    store.backup_original()?;
    tasks.push(task);
    store.save(&tasks)?;

    output.push_str(&format!(
        "{} {}",
        "Added task:".green().bold(),
        format_task_line(tasks.len(), &tasks[tasks.len() - 1])
    ));

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(dir: &TempDir, contents: &str) -> TaskFile {
        let store = TaskFile::new(dir.path().join("todo.txt"), false);
        std::fs::write(&store.path, contents).unwrap();
        store
    }

    #[test]
    fn test_add_appends_with_creation_date() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, "existing task\n");

        add(&store, &["buy".to_string(), "milk".to_string()]).unwrap();

        let tasks = store.load().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].description, "buy milk");
        assert_eq!(tasks[1].creation_date, Some(Local::now().date_naive()));
    }

    #[test]
    fn test_add_rewrites_relative_due_dates() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, "");

        let output = add(&store, &["pay".to_string(), "rent".to_string(), "due:today".to_string()])
            .unwrap();
        assert!(output.contains("Rewrote task:"));

        let tasks = store.load().unwrap();
        assert_eq!(tasks[0].due_date, Some(Local::now().date_naive()));
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, "");

        assert!(matches!(
            add(&store, &[" ".to_string()]),
            Err(TdoError::EmptyTask)
        ));
    }
}
