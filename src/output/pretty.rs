use colored::Colorize;

use crate::core::Task;

/// Format a numbered task list as colored text.
#[must_use]
pub fn format_tasks_pretty(tasks: &[Task]) -> String {
    let mut output = String::new();

    for (index, task) in tasks.iter().enumerate() {
        output.push_str(&format_task_line(index + 1, task));
        output.push('\n');
    }

    output
}

/// Format one task with its 1-based number.
#[must_use]
pub fn format_task_line(number: usize, task: &Task) -> String {
    let prefix = format!("{number:03}").dimmed();

    if task.is_separator() {
        return format!("{prefix} {}", task.to_text().dimmed());
    }

    let line = if task.completed {
        task.to_text().dimmed().to_string()
    } else if task.priority.is_empty() {
        task.to_text()
    } else {
        task.to_text().bold().to_string()
    };

    format!("{prefix} {line}")
}
