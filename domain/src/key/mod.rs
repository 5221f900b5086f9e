//! Translation key rules: live validation and domain derivation.

pub mod validation;

pub use validation::{KeyIssue, domain_of_key, is_blank, validate_key};
