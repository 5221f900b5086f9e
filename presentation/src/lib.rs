//! Presentation layer for transkey
//!
//! This crate contains CLI definitions, output formatters,
//! and the interactive extract-key dialog.

pub mod cli;
pub mod dialog;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use dialog::{DialogError, InteractiveDialog};
pub use output::{ConsoleFormatter, JsonFormatter, OutputFormatter, formatter_for};
