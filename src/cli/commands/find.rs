//! Find command implementation.

use std::fmt::Write as _;

use crate::error::TdoError;
use crate::features::interactive::Picker;
use crate::output::format_task_line;
use crate::storage::TaskFile;

/// Fuzzy-pick tasks and print the selected numbers.
///
/// # Errors
///
/// Returns an error if the task file cannot be read or the picker
/// fails.
pub fn find(store: &TaskFile, picker: &dyn Picker) -> Result<String, TdoError> {
    let tasks = store.load()?;
    let selected = picker.present(&tasks)?;

    let mut output = String::new();
    let mut numbers = String::new();

    for &index in &selected {
        let task = tasks
            .get(index)
            .ok_or(TdoError::TaskNumber(index + 1))?;
        writeln!(output, "{}", format_task_line(index + 1, task)).ok();
        write!(numbers, "{} ", index + 1).ok();
    }

    write!(output, "Selected: {}", numbers.trim_end()).ok();

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Task;
    use tempfile::TempDir;

    /// Picker fake returning fixed indices.
    struct FixedPicker(Vec<usize>);

    impl Picker for FixedPicker {
        fn present(&self, _tasks: &[Task]) -> Result<Vec<usize>, TdoError> {
            Ok(self.0.clone())
        }
    }

    fn store_with(dir: &TempDir, contents: &str) -> TaskFile {
        let store = TaskFile::new(dir.path().join("todo.txt"), false);
        std::fs::write(&store.path, contents).unwrap();
        store
    }

    #[test]
    fn test_find_prints_selected_numbers() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, "first task\nsecond task\nthird task\n");

        let output = find(&store, &FixedPicker(vec![0, 2])).unwrap();

        assert!(output.contains("001 first task"));
        assert!(output.contains("003 third task"));
        assert!(output.ends_with("Selected: 1 3"));
    }

    #[test]
    fn test_find_with_no_selection() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, "only task\n");

        let output = find(&store, &FixedPicker(vec![])).unwrap();

        assert_eq!(output, "Selected: ");
    }

    #[test]
    fn test_find_rejects_out_of_range_selection() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, "only task\n");

        assert!(find(&store, &FixedPicker(vec![5])).is_err());
    }
}
