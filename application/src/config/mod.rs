//! Application-level configuration.
//!
//! - [`SessionParams`] - knobs for the extract-key dialog session

pub mod session_params;

pub use session_params::SessionParams;
