//! Ranking configuration from TOML (`[ranking]` section)

use serde::{Deserialize, Serialize};
use transkey_domain::RankingRules;
use transkey_domain::candidate::DEFAULT_SOURCE_ROOTS;

/// Raw ranking configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRankingConfig {
    /// Project-relative path prefixes treated as source locations
    pub source_roots: Vec<String>,
}

impl Default for FileRankingConfig {
    fn default() -> Self {
        Self {
            source_roots: DEFAULT_SOURCE_ROOTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FileRankingConfig {
    pub fn to_rules(&self) -> RankingRules {
        RankingRules {
            source_roots: self.source_roots.clone(),
        }
    }
}
