//! Domain layer for transkey
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Candidates
//!
//! When a string literal is extracted into a translation key, every
//! translation resource registered for the key's domain is a possible
//! write target. Each one becomes a [`Candidate`] with a relevance weight:
//!
//! - **Primary package**: the file shares the package of the file the
//!   literal was found in (+2)
//! - **Source root**: the file's project-relative path starts with a
//!   source root such as `src` or `app` (+1)
//!
//! ## Outcome
//!
//! A dialog session ends in exactly one [`DialogOutcome`]: confirmed with a
//! [`ConfirmResult`], discarded, or cancelled.

pub mod candidate;
pub mod config;
pub mod core;
pub mod key;
pub mod resource;
pub mod session;
pub mod table;

// Re-export commonly used types
pub use candidate::{
    Candidate, CandidateList, RankingContext, RankingRules, build_candidates,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use key::{KeyIssue, domain_of_key, validate_key};
pub use resource::{PackageRef, ResourceFile, ResourceFormat};
pub use session::{ConfirmResult, Confirmation, DialogOutcome, DiscardReason};
pub use table::{COLUMNS, CellValue, Column, Marker};
