//! Candidate entity

use crate::resource::{PackageRef, ResourceFile};
use serde::Serialize;

/// A resource file considered as a write target for a new key.
///
/// `weight` is fixed once ranking has finished; `included` is the only
/// field user interaction changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    file: ResourceFile,
    containing_package: Option<PackageRef>,
    is_primary_package: bool,
    relative_path: Option<String>,
    #[serde(skip)]
    weight: u32,
    included: bool,
}

impl Candidate {
    pub fn new(file: ResourceFile) -> Self {
        Self {
            file,
            containing_package: None,
            is_primary_package: false,
            relative_path: None,
            weight: 0,
            included: false,
        }
    }

    pub fn file(&self) -> &ResourceFile {
        &self.file
    }

    pub fn containing_package(&self) -> Option<&PackageRef> {
        self.containing_package.as_ref()
    }

    pub fn is_primary_package(&self) -> bool {
        self.is_primary_package
    }

    pub fn relative_path(&self) -> Option<&str> {
        self.relative_path.as_deref()
    }

    /// Ordering weight. Never displayed.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn is_included(&self) -> bool {
        self.included
    }

    /// Include or exclude this file from the write set
    pub fn set_included(&mut self, value: bool) {
        self.included = value;
    }

    /// Text shown in the path column: package name, then relative path,
    /// then the bare file name.
    pub fn display_path(&self) -> String {
        if let Some(package) = &self.containing_package {
            return package.name().to_string();
        }
        if let Some(relative) = &self.relative_path {
            return relative.clone();
        }
        self.file.file_name()
    }

    pub(crate) fn mark_primary(&mut self, package: PackageRef) {
        self.containing_package = Some(package);
        self.is_primary_package = true;
    }

    pub(crate) fn set_containing_package(&mut self, package: Option<PackageRef>) {
        self.containing_package = package;
    }

    pub(crate) fn set_relative_path(&mut self, relative: Option<String>) {
        self.relative_path = relative;
    }

    pub(crate) fn add_weight(&mut self, bonus: u32) {
        self.weight += bonus;
    }
}
