//! Session parameters for the extract-key dialog.
//!
//! [`SessionParams`] groups the static parameters that control an
//! [`ExtractKeySession`](crate::use_cases::extract_key::ExtractKeySession).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use transkey_domain::RankingRules;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionParams {
    /// Candidate ranking rules
    pub ranking: RankingRules,
    /// Initial state of the "navigate afterwards" checkbox
    pub navigate: bool,
}

impl SessionParams {
    // ==================== Builder Methods ====================

    pub fn with_ranking(mut self, ranking: RankingRules) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn with_navigate(mut self, navigate: bool) -> Self {
        self.navigate = navigate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SessionParams::default();
        assert_eq!(params.ranking.source_roots, vec!["src", "app"]);
        assert!(!params.navigate);
    }

    #[test]
    fn test_builder_methods() {
        let params = SessionParams::default()
            .with_navigate(true)
            .with_ranking(RankingRules {
                source_roots: vec!["lib".to_string()],
            });
        assert!(params.navigate);
        assert_eq!(params.ranking.source_roots, vec!["lib"]);
    }
}
