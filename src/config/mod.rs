//! Configuration for tdo.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::Config;
