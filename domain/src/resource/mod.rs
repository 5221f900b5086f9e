//! Translation resource files and the packages that contain them.
//!
//! - [`entities::ResourceFile`] - a translation resource document on disk
//! - [`entities::ResourceFormat`] - the document format, with the supported allow-list
//! - [`entities::PackageRef`] - a package/bundle a file belongs to

pub mod entities;

pub use entities::{PackageRef, ResourceFile, ResourceFormat};
