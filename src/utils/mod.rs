//! Utility functions shared across the application.

mod editor;
mod shell;

pub use editor::{Editor, ExternalEditor, ScratchFile};
pub use shell::export_lines;
