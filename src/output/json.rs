use serde_json::json;

use crate::core::Task;
use crate::error::TdoError;

/// Format a task list as pretty-printed JSON, numbered by position.
///
/// # Errors
///
/// Returns `TdoError::Json` if serialization fails.
pub fn format_tasks_json(tasks: &[Task]) -> Result<String, TdoError> {
    let entries: Vec<(usize, Task)> = tasks
        .iter()
        .enumerate()
        .map(|(index, task)| (index + 1, task.clone()))
        .collect();

    format_numbered_json(&entries)
}

/// Format explicitly numbered tasks as pretty-printed JSON.
///
/// # Errors
///
/// Returns `TdoError::Json` if serialization fails.
pub fn format_numbered_json(entries: &[(usize, Task)]) -> Result<String, TdoError> {
    let items: Vec<_> = entries
        .iter()
        .map(|(number, task)| {
            json!({
                "number": number,
                "text": task.to_text(),
                "task": task,
            })
        })
        .collect();

    serde_json::to_string_pretty(&items).map_err(TdoError::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_task;

    #[test]
    fn test_json_output_includes_numbers_and_fields() {
        let tasks = vec![parse_task("(A) first task due:2020-08-11")];
        let output = format_tasks_json(&tasks).unwrap();

        assert!(output.contains("\"number\": 1"));
        assert!(output.contains("\"priority\": \"A\""));
        assert!(output.contains("\"due_date\": \"2020-08-11\""));
        assert!(output.contains("\"text\": \"(A) first task due:2020-08-11\""));
    }

    #[test]
    fn test_numbered_json_keeps_given_numbers() {
        let entries = vec![(5, parse_task("fifth task"))];
        let output = format_numbered_json(&entries).unwrap();

        assert!(output.contains("\"number\": 5"));
    }
}
