//! Date-ascending task ordering.
//!
//! Tasks sort by due date, earliest first. Undated tasks order before
//! every dated task. On equal due dates the day-separator task sorts
//! last, so a sorted view splits cleanly at the separator's date; all
//! other ties keep their original relative order.

use std::cmp::Ordering;

use super::task::Task;

/// Sort a copy of the task list by due date.
///
/// The input keeps its original order, which is what the numbered
/// operations index into.
#[must_use]
pub fn sort_by_date(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sort_by_date_in_place(&mut sorted);
    sorted
}

/// Sort the task list by due date, in place.
pub fn sort_by_date_in_place(tasks: &mut [Task]) {
    tasks.sort_by(compare_by_due_date);
}

fn compare_by_due_date(lhs: &Task, rhs: &Task) -> Ordering {
    // Option<NaiveDate> orders None first, floating undated tasks to
    // the front of the list.
    match lhs.due_date.cmp(&rhs.due_date) {
        Ordering::Equal => match (lhs.is_separator(), rhs.is_separator()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
        ordering => ordering,
    }
}

#[cfg(test)]
mod tests {
    use super::super::task::{parse_task, SEPARATOR};
    use super::*;

    #[test]
    fn test_sorts_by_due_date_ascending() {
        let tasks = vec![
            parse_task("late due:2020-09-01"),
            parse_task("early due:2020-08-01"),
            parse_task("middle due:2020-08-15"),
        ];

        let sorted = sort_by_date(&tasks);

        assert_eq!(sorted[0].description, "early due:2020-08-01");
        assert_eq!(sorted[1].description, "middle due:2020-08-15");
        assert_eq!(sorted[2].description, "late due:2020-09-01");
    }

    #[test]
    fn test_undated_tasks_float_to_front() {
        let tasks = vec![
            parse_task("dated due:2020-08-01"),
            parse_task("undated"),
        ];

        let sorted = sort_by_date(&tasks);

        assert_eq!(sorted[0].description, "undated");
        assert_eq!(sorted[1].description, "dated due:2020-08-01");
    }

    #[test]
    fn test_separator_sorts_last_among_equal_dates() {
        let marker = format!("{SEPARATOR} due:2020-08-10");
        let tasks = vec![
            parse_task(&marker),
            parse_task("first due:2020-08-10"),
            parse_task("second due:2020-08-10"),
        ];

        let sorted = sort_by_date(&tasks);

        assert_eq!(sorted[0].description, "first due:2020-08-10");
        assert_eq!(sorted[1].description, "second due:2020-08-10");
        assert!(sorted[2].is_separator());
    }

    #[test]
    fn test_equal_dates_keep_relative_order() {
        let tasks = vec![
            parse_task("a due:2020-08-10"),
            parse_task("b due:2020-08-10"),
            parse_task("c due:2020-08-10"),
        ];

        let sorted = sort_by_date(&tasks);

        let order: Vec<&str> = sorted.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(
            order,
            ["a due:2020-08-10", "b due:2020-08-10", "c due:2020-08-10"]
        );
    }

    #[test]
    fn test_sorting_a_copy_leaves_numbering_intact() {
        let tasks = vec![
            parse_task("third due:2020-09-01"),
            parse_task("first due:2020-07-01"),
            parse_task("second due:2020-08-01"),
        ];

        let _sorted = sort_by_date(&tasks);

        // 1-based selection against the original parse order
        assert_eq!(tasks[0].description, "third due:2020-09-01");
        assert_eq!(tasks[1].description, "first due:2020-07-01");
        assert_eq!(tasks[2].description, "second due:2020-08-01");
    }

    #[test]
    fn test_sort_in_place() {
        let mut tasks = vec![
            parse_task("late due:2020-09-01"),
            parse_task("early due:2020-08-01"),
        ];

        sort_by_date_in_place(&mut tasks);

        assert_eq!(tasks[0].description, "early due:2020-08-01");
        assert_eq!(tasks[1].description, "late due:2020-09-01");
    }
}
