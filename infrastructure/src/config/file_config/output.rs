//! Result output settings (`[output]` section)

use serde::{Deserialize, Serialize};
use transkey_domain::OutputFormat;

/// How `transkey` prints tables and outcomes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `text` or `json`; `-o` on the command line wins, unset means text
    pub format: Option<OutputFormat>,
    /// Colors in text output and in the dialog
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
