//! Terminal host for the extract-key dialog

pub mod command;
pub mod interactive;

pub use command::DialogCommand;
pub use interactive::{DialogError, InteractiveDialog};
