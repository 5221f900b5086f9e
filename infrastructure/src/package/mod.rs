//! Package (bundle) detection

pub mod locator;

pub use locator::FsPackageLocator;
