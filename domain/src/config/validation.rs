//! Structured configuration issues.
//!
//! Loaders report problems as [`ConfigIssue`]s instead of failing on the
//! first one, so every problem in a config file is shown at once.
//!
//! # Examples
//!
//! ```
//! use transkey_domain::config::{ConfigIssue, ConfigIssueCode, Severity, has_errors};
//!
//! let issues = vec![ConfigIssue::warning(ConfigIssueCode::NoPackageRules, "no package rules")];
//! assert!(!has_errors(&issues));
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `ranking.source_roots` contains an empty entry, which would match every path.
    EmptySourceRoot,
    /// `index.patterns` is empty: no translation file can be found.
    NoPatterns,
    /// An `index.patterns` entry is blank.
    EmptyPattern,
    /// An `index.patterns` entry is not a valid glob.
    InvalidPattern { pattern: String },
    /// Neither `packages.suffixes` nor `packages.markers` is set.
    NoPackageRules,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }
}

/// Whether any issue is fatal
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}
