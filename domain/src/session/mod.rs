//! Values an extract-key dialog session hands back to its caller.

pub mod outcome;

pub use outcome::{Confirmation, ConfirmResult, DialogOutcome, DiscardReason};
