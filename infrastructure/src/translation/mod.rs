//! Translation file discovery and key lookup

pub mod index;
pub mod keys;

pub use index::{FsTranslationIndex, IndexError, domain_of_file_name};
pub use keys::{KeyReadError, read_keys};
