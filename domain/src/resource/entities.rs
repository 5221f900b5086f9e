//! Resource domain entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Format of a translation resource document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceFormat {
    /// `.yml` / `.yaml`
    Yaml,
    /// `.xlf` / `.xliff`
    Xliff,
    /// `.php` array files
    Php,
    /// `.json`
    Json,
    /// gettext `.po`
    Po,
    /// Anything else
    Other,
}

impl ResourceFormat {
    /// Detect the format from a file extension (case-insensitive, without the dot)
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "yml" | "yaml" => Self::Yaml,
            "xlf" | "xliff" => Self::Xliff,
            "php" => Self::Php,
            "json" => Self::Json,
            "po" => Self::Po,
            _ => Self::Other,
        }
    }

    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Other)
    }

    /// Whether new keys can be written into this format.
    ///
    /// Only YAML and XLIFF documents are write targets.
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Yaml | Self::Xliff)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Xliff => "xliff",
            Self::Php => "php",
            Self::Json => "json",
            Self::Po => "po",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ResourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A translation resource document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceFile {
    path: PathBuf,
    format: ResourceFormat,
}

impl ResourceFile {
    /// Create a resource file, detecting the format from the extension
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = ResourceFormat::from_path(&path);
        Self { path, format }
    }

    /// Create a resource file with an explicit format
    pub fn with_format(path: impl Into<PathBuf>, format: ResourceFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ResourceFormat {
        self.format
    }

    pub fn is_supported(&self) -> bool {
        self.format.is_supported()
    }

    /// Final path component, or the whole path when there is none
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// A package/bundle that owns a set of files.
///
/// Two references are equal when they point at the same root directory;
/// the name is only used for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageRef {
    name: String,
    root: PathBuf,
}

impl PackageRef {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `path` lies inside this package's root
    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(&self.root)
    }
}

impl PartialEq for PackageRef {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl Eq for PackageRef {}

impl Hash for PackageRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root.hash(state);
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
