//! Infrastructure layer for transkey
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod package;
pub mod translation;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileDialogConfig, FileIndexConfig, FileOutputConfig,
    FilePackagesConfig, FileRankingConfig,
};
pub use package::FsPackageLocator;
pub use translation::{FsTranslationIndex, IndexError};
