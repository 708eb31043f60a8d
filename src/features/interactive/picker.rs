//! Fuzzy task picker built on skim.

use std::sync::Arc;

use skim::prelude::*;

use crate::core::Task;
use crate::error::TdoError;
use crate::output::format_task_line;

/// Capability to present tasks and return the selected indices.
pub trait Picker {
    /// Present the tasks and return zero-based indices of the
    /// selections. An aborted interaction returns an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the picker cannot be started.
    fn present(&self, tasks: &[Task]) -> Result<Vec<usize>, TdoError>;
}

/// Interactive multi-select picker using skim.
pub struct SkimPicker;

/// A numbered task line that skim can display and identify.
struct TaskItem {
    display: String,
    index: usize,
}

impl SkimItem for TaskItem {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.display)
    }

    fn output(&self) -> Cow<'_, str> {
        // The index maps the selection back to the unsorted list
        Cow::Owned(self.index.to_string())
    }
}

impl Picker for SkimPicker {
    fn present(&self, tasks: &[Task]) -> Result<Vec<usize>, TdoError> {
        if tasks.is_empty() {
            return Ok(Vec::new());
        }

        let options = SkimOptionsBuilder::default()
            .height(Some("50%"))
            .multi(true)
            .prompt(Some("Select task > "))
            .bind(vec!["ctrl-c:abort", "enter:accept", "tab:toggle"])
            .build()
            .map_err(|e| TdoError::Picker(format!("Failed to build picker options: {e}")))?;

        let (tx, rx): (SkimItemSender, SkimItemReceiver) = unbounded();

        for (index, task) in tasks.iter().enumerate() {
            let item: Arc<dyn SkimItem> = Arc::new(TaskItem {
                display: format_task_line(index + 1, task),
                index,
            });
            let _ = tx.send(item);
        }
        drop(tx);

        let output = Skim::run_with(&options, Some(rx))
            .ok_or_else(|| TdoError::Picker("Failed to start picker".to_string()))?;

        if output.is_abort {
            return Ok(Vec::new());
        }

        let mut selected = Vec::new();
        for item in &output.selected_items {
            let index = item
                .output()
                .parse::<usize>()
                .map_err(|e| TdoError::Picker(format!("Unexpected selection: {e}")))?;
            selected.push(index);
        }
        selected.sort_unstable();

        Ok(selected)
    }
}
