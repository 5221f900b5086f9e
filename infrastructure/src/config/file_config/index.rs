//! Translation index configuration from TOML (`[index]` section)

use serde::{Deserialize, Serialize};

/// Where translation files live, as globs relative to the project root
pub const DEFAULT_PATTERNS: [&str; 3] = [
    "translations/*",
    "app/Resources/translations/*",
    "src/**/Resources/translations/*",
];

/// Raw index configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIndexConfig {
    /// Glob patterns, relative to the project root
    pub patterns: Vec<String>,
}

impl Default for FileIndexConfig {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
