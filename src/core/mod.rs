//! Core task model: parsing, serialization, and date ordering.

mod dates;
mod sort;
mod task;

pub use dates::rewrite_relative_dates;
pub use sort::{sort_by_date, sort_by_date_in_place};
pub use task::{parse_all, parse_task, Task, SEPARATOR};
