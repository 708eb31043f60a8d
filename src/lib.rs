//! tdo - a todo.txt CLI
//!
//! This crate manages a plain-text task list in the todo.txt format:
//! one task per line, with an optional completion marker, priority,
//! dates, and embedded `due:YYYY-MM-DD` metadata.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TdoError;
pub use self::core::{parse_all, parse_task, sort_by_date, Task};
pub use storage::TaskFile;
