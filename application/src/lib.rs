//! Application layer for transkey
//!
//! This crate contains the extract-key dialog session, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionParams;
pub use ports::{
    package_locator::{NoPackages, PackageLocatorPort, StaticPackageLocator},
    translation_index::{InMemoryTranslationIndex, TranslationIndexPort},
};
pub use use_cases::extract_key::{ExtractKeyRequest, ExtractKeySession, SessionError};
