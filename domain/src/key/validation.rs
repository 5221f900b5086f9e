//! Key validation
//!
//! [`validate_key`] is pure: the host calls it on every edit of the key text
//! and shows the returned advisory next to the field.
//!
//! # Examples
//!
//! ```
//! use transkey_domain::key::{KeyIssue, domain_of_key, validate_key};
//!
//! let existing = ["app.greeting"];
//! let issue = validate_key("app.greeting", |k| existing.contains(&k));
//! assert_eq!(issue, Some(KeyIssue::AlreadyExists));
//! assert_eq!(domain_of_key("app.greeting"), Some("app"));
//! ```

use serde::Serialize;
use thiserror::Error;

/// Advisory shown next to the key field
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyIssue {
    #[error("Key already exists")]
    AlreadyExists,
}

/// Check the key text against the global key set.
pub fn validate_key<F>(text: &str, key_exists: F) -> Option<KeyIssue>
where
    F: Fn(&str) -> bool,
{
    if key_exists(text) {
        Some(KeyIssue::AlreadyExists)
    } else {
        None
    }
}

/// Domain part of a key: everything before the first `.`.
///
/// `None` when the key has no `.` or starts with one.
pub fn domain_of_key(text: &str) -> Option<&str> {
    let end = text.find('.')?;
    if end == 0 {
        return None;
    }
    Some(&text[..end])
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
