//! File system package locator
//!
//! A package is a directory below the project root that either has a name
//! ending in one of the configured suffixes (`AppBundle`) or contains one of
//! the configured marker files (`composer.json`). The nearest such ancestor
//! of a path is the package containing it.
//!
//! The project root itself is never a package, otherwise every file in a
//! project with a root `composer.json` would share the primary bonus.

use std::path::{Path, PathBuf};
use tracing::trace;
use transkey_application::PackageLocatorPort;
use transkey_domain::PackageRef;

/// Package locator that walks up the directory tree.
#[derive(Debug, Clone)]
pub struct FsPackageLocator {
    project_root: PathBuf,
    suffixes: Vec<String>,
    markers: Vec<String>,
}

impl FsPackageLocator {
    pub fn new(project_root: impl Into<PathBuf>, suffixes: Vec<String>, markers: Vec<String>) -> Self {
        Self {
            project_root: project_root.into(),
            suffixes: suffixes.into_iter().filter(|s| !s.is_empty()).collect(),
            markers: markers.into_iter().filter(|m| !m.is_empty()).collect(),
        }
    }

    fn is_package_dir(&self, dir: &Path) -> bool {
        let name_matches = dir
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.suffixes.iter().any(|s| name.ends_with(s.as_str())));

        name_matches || self.markers.iter().any(|m| dir.join(m).is_file())
    }
}

impl PackageLocatorPort for FsPackageLocator {
    fn containing_package(&self, path: &Path) -> Option<PackageRef> {
        let path = if path.is_relative() {
            self.project_root.join(path)
        } else {
            path.to_path_buf()
        };

        if !path.starts_with(&self.project_root) {
            trace!("{:?} is outside the project root", path);
            return None;
        }

        let mut dir = path.parent();
        while let Some(current) = dir {
            if current == self.project_root || !current.starts_with(&self.project_root) {
                break;
            }
            if self.is_package_dir(current) {
                let name = current
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                trace!("{:?} belongs to package {}", path, name);
                return Some(PackageRef::new(name, current));
            }
            dir = current.parent();
        }

        None
    }
}
