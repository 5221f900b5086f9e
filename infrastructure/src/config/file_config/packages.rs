//! Package detection configuration from TOML (`[packages]` section)

use serde::{Deserialize, Serialize};

/// Raw package configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePackagesConfig {
    /// Directory name suffixes that mark a package root (e.g. `AcmeBlogBundle`)
    pub suffixes: Vec<String>,
    /// File names whose presence marks a package root
    pub markers: Vec<String>,
}

impl Default for FilePackagesConfig {
    fn default() -> Self {
        Self {
            suffixes: vec!["Bundle".to_string()],
            markers: vec!["composer.json".to_string()],
        }
    }
}
