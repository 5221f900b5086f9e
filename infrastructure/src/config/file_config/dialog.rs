//! Dialog configuration from TOML (`[dialog]` section)

use serde::{Deserialize, Serialize};

/// Raw dialog configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDialogConfig {
    /// Pre-check "navigate afterwards"
    pub navigate: bool,
}
