//! Interactive capabilities: fuzzy picking and external editing.
//!
//! Commands depend on the `Picker` and `Editor` traits rather than on
//! process spawning, so tests can substitute fakes.

mod editor;
mod picker;

pub use editor::{Editor, ExternalEditor};
pub use picker::{Picker, SkimPicker};
