//! Feature modules for tdo.

pub mod interactive;
pub mod shell;
