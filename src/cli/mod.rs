//! Command-line interface for tdo.

pub mod args;
pub mod commands;
