//! File system translation index
//!
//! This module provides [`FsTranslationIndex`], the [`TranslationIndexPort`]
//! implementation that discovers translation files below a project root.
//!
//! # File Detection
//!
//! Files are found by expanding glob patterns relative to the project root.
//! A file named `<domain>.<locale>.<ext>` is registered under `<domain>`;
//! the ICU suffix is dropped, so `messages+intl-icu.fr.xlf` belongs to
//! `messages`. Names with fewer than three dot-separated parts are ignored.
//!
//! Keys are read once, at scan time, from every supported document, so
//! `key_exists` is a set lookup. A document that cannot be read or parsed
//! stays registered as a write target but contributes no keys.

use super::keys::read_keys;
use glob::{Pattern, glob};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use transkey_application::TranslationIndexPort;
use transkey_domain::ResourceFile;

const ICU_SUFFIX: &str = "+intl-icu";

/// Errors while scanning for translation files
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Project root {0:?} is not a directory")]
    NotADirectory(PathBuf),
}

/// Translation index built from the local file system.
#[derive(Debug, Clone, Default)]
pub struct FsTranslationIndex {
    files: BTreeMap<String, Vec<ResourceFile>>,
    keys: HashSet<String>,
}

impl FsTranslationIndex {
    /// Scan `project_root` with `patterns` (relative globs).
    ///
    /// Unreadable files are logged and skipped; only a bad pattern or a
    /// missing root fails the scan.
    pub fn scan<S: AsRef<str>>(project_root: &Path, patterns: &[S]) -> Result<Self, IndexError> {
        if !project_root.is_dir() {
            return Err(IndexError::NotADirectory(project_root.to_path_buf()));
        }

        let base = Pattern::escape(&project_root.to_string_lossy());
        let mut seen = HashSet::new();
        let mut index = Self::default();

        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() {
                continue;
            }

            let full_pattern = format!("{}/{}", base.trim_end_matches('/'), pattern);
            let entries = glob(&full_pattern).map_err(|source| IndexError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;

            for entry in entries {
                let path = match entry {
                    Ok(path) => path,
                    Err(e) => {
                        warn!("Skipping unreadable path: {}", e);
                        continue;
                    }
                };
                if !path.is_file() || !seen.insert(path.clone()) {
                    continue;
                }
                index.register(path);
            }
        }

        info!(
            "Indexed {} domain(s), {} key(s) under {:?}",
            index.files.len(),
            index.keys.len(),
            project_root
        );
        Ok(index)
    }

    fn register(&mut self, path: PathBuf) {
        let Some(domain) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(domain_of_file_name)
        else {
            debug!("Ignoring {:?}: not <domain>.<locale>.<ext>", path);
            return;
        };

        let file = ResourceFile::new(path);
        if file.is_supported() {
            match fs::read_to_string(file.path()) {
                Ok(content) => match read_keys(file.format(), &content) {
                    Ok(keys) => self.keys.extend(keys),
                    Err(e) => warn!("Failed to parse {:?}: {}", file.path(), e),
                },
                Err(e) => warn!("Failed to read {:?}: {}", file.path(), e),
            }
        }

        debug!("Registered {:?} under domain '{}'", file.path(), domain);
        self.files.entry(domain).or_default().push(file);
    }
}

/// Domain of a translation file name, `None` if it is not `<domain>.<locale>.<ext>`
pub fn domain_of_file_name(name: &str) -> Option<String> {
    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() < 3 {
        return None;
    }
    let domain = parts[..parts.len() - 2].join(".");
    let domain = domain.strip_suffix(ICU_SUFFIX).unwrap_or(&domain);
    if domain.is_empty() {
        return None;
    }
    Some(domain.to_string())
}

impl TranslationIndexPort for FsTranslationIndex {
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
