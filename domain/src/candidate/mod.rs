//! Candidate ranking and selection.
//!
//! A [`Candidate`] is a resource file offered as a write target for a new
//! key. [`build_candidates`] turns resolver output into a weighted, ordered
//! [`CandidateList`]; the user then flips `included` flags on it.
//!
//! # Ranking
//!
//! ```text
//! weight = 0
//!        + 2  if the file shares the context file's package
//!        + 1  if its project-relative path starts with a source root
//! ```
//!
//! Candidates are stable-sorted by descending weight, so equal weights keep
//! the resolver's order.

pub mod entities;
pub mod list;
pub mod ranking;

pub use entities::Candidate;
pub use list::CandidateList;
pub use ranking::{
    DEFAULT_SOURCE_ROOTS, PRIMARY_PACKAGE_BONUS, RankingContext, RankingRules,
    SOURCE_ROOT_BONUS, build_candidates, relative_path,
};
