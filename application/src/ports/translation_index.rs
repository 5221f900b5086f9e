//! Translation index port.
//!
//! Defines the interface to the project's translation index: which resource
//! files belong to a domain, which domains exist, and whether a key is
//! already defined anywhere. Infrastructure adapters implement this to
//! provide the actual lookup (e.g., by scanning translation directories).
//!
//! # Built-in Implementations
//!
//! - [`InMemoryTranslationIndex`] - fixed files and keys, for hosts that
//!   already know them and for tests

use std::collections::{BTreeMap, HashSet};
use transkey_domain::ResourceFile;

/// Port for querying the translation index.
///
/// Calls are synchronous: `key_exists` runs on every edit of the key field.
pub trait TranslationIndexPort: Send + Sync {
    /// All resource files registered under `domain`, any format, in index order.
    fn domain_files(&self, domain: &str) -> Vec<ResourceFile>;

    /// Every known domain, sorted.
    fn domains(&self) -> Vec<String>;

    /// Whether `key` is already defined in any resource.
    fn key_exists(&self, key: &str) -> bool;
}

/// Translation index backed by in-memory tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTranslationIndex {
    files: BTreeMap<String, Vec<ResourceFile>>,
    keys: HashSet<String>,
}

impl InMemoryTranslationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `file` under `domain`
    pub fn with_file(mut self, domain: impl Into<String>, file: ResourceFile) -> Self {
        self.files.entry(domain.into()).or_default().push(file);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.keys.insert(key.into());
        self
    }
}

impl TranslationIndexPort for InMemoryTranslationIndex {
    fn domain_files(&self, domain: &str) -> Vec<ResourceFile> {
        self.files.get(domain).cloned().unwrap_or_default()
    }

    fn domains(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    fn key_exists(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}
