//! Configuration file loading for transkey
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `transkey.toml` or `.transkey.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/transkey/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_PATTERNS, FileConfig, FileDialogConfig, FileIndexConfig, FileOutputConfig,
    FilePackagesConfig, FileRankingConfig,
};
pub use loader::ConfigLoader;
