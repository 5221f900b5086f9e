//! Package locator port.
//!
//! Answers "which package/bundle does this file belong to?". The dialog
//! session asks once for the context file and once per candidate.

use std::path::Path;
use transkey_domain::PackageRef;

/// Port for package/bundle containment lookup.
pub trait PackageLocatorPort: Send + Sync {
    /// The package containing `path`, or `None` if it is not part of one.
    fn containing_package(&self, path: &Path) -> Option<PackageRef>;
}

/// Locator that never finds a package.
///
/// With it no candidate earns the primary package bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPackages;

impl PackageLocatorPort for NoPackages {
    fn containing_package(&self, _path: &Path) -> Option<PackageRef> {
        None
    }
}

/// Locator over a fixed list of packages; the deepest root containing the
/// path wins.
#[derive(Debug, Clone, Default)]
pub struct StaticPackageLocator {
    packages: Vec<PackageRef>,
}

impl StaticPackageLocator {
    pub fn new(packages: Vec<PackageRef>) -> Self {
        Self { packages }
    }
}

impl PackageLocatorPort for StaticPackageLocator {
    fn containing_package(&self, path: &Path) -> Option<PackageRef> {
        self.packages
            .iter()
            .filter(|p| p.contains(path))
            .max_by_key(|p| p.root().components().count())
            .cloned()
    }
}
