//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod dialog;
mod index;
mod output;
mod packages;
mod ranking;

pub use dialog::FileDialogConfig;
pub use index::{DEFAULT_PATTERNS, FileIndexConfig};
pub use output::FileOutputConfig;
pub use packages::FilePackagesConfig;
pub use ranking::FileRankingConfig;

use serde::{Deserialize, Serialize};
use transkey_application::SessionParams;
use transkey_domain::config::{ConfigIssue, ConfigIssueCode};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Candidate ranking settings
    pub ranking: FileRankingConfig,
    /// Translation file discovery settings
    pub index: FileIndexConfig,
    /// Package/bundle detection settings
    pub packages: FilePackagesConfig,
    /// Dialog defaults
    pub dialog: FileDialogConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Empty source roots (they would match every path)
    /// 2. Missing, blank or malformed index patterns
    /// 3. Package detection with no rules at all
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Source roots
        if self.ranking.source_roots.iter().any(|r| r.trim().is_empty()) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptySourceRoot,
                "ranking.source_roots: empty entry matches every path",
            ));
        }

        // 2. Index patterns
        if self.index.patterns.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::NoPatterns,
                "index.patterns is empty: no translation file can be found",
            ));
        }
        for pattern in &self.index.patterns {
            if pattern.trim().is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyPattern,
                    "index.patterns: blank entry is ignored",
                ));
            } else if let Err(e) = glob::Pattern::new(pattern) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidPattern {
                        pattern: pattern.clone(),
                    },
                    format!("index.patterns: '{}' is not a valid glob: {}", pattern, e),
                ));
            }
        }

        // 3. Package rules
        if self.packages.suffixes.is_empty() && self.packages.markers.is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::NoPackageRules,
                "[packages] has no suffixes or markers: no file will get the primary package bonus",
            ));
        }

        issues
    }

    /// Session parameters for the application layer
    pub fn session_params(&self) -> SessionParams {
        SessionParams::default()
            .with_ranking(self.ranking.to_rules())
            .with_navigate(self.dialog.navigate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transkey_domain::config::{Severity, has_errors};
    use transkey_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[ranking]
source_roots = ["src"]

[index]
patterns = ["i18n/*"]

[packages]
suffixes = ["Module"]
markers = ["package.json"]

[dialog]
navigate = true

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ranking.source_roots, vec!["src"]);
        assert_eq!(config.index.patterns, vec!["i18n/*"]);
        assert_eq!(config.packages.suffixes, vec!["Module"]);
        assert_eq!(config.packages.markers, vec!["package.json"]);
        assert!(config.dialog.navigate);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[dialog]
navigate = true
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.dialog.navigate);
        // Defaults should apply
        assert_eq!(config.ranking.source_roots, vec!["src", "app"]);
        assert_eq!(config.index.patterns.len(), DEFAULT_PATTERNS.len());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.ranking.source_roots.push(String::new());
        config.index.patterns = vec!["".to_string(), "src/[".to_string()];
        config.packages.suffixes.clear();
        config.packages.markers.clear();

        let issues = config.validate();
        let codes: Vec<_> = issues.iter().map(|i| i.code.clone()).collect();
        assert_eq!(
            codes,
            vec![
                ConfigIssueCode::EmptySourceRoot,
                ConfigIssueCode::EmptyPattern,
                ConfigIssueCode::InvalidPattern {
                    pattern: "src/[".to_string()
                },
                ConfigIssueCode::NoPackageRules,
            ]
        );
        assert!(has_errors(&issues));
    }

    #[test]
    fn test_validate_no_patterns_is_error() {
        let mut config = FileConfig::default();
        config.index.patterns.clear();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].code, ConfigIssueCode::NoPatterns);
    }

    #[test]
    fn test_session_params() {
        let mut config = FileConfig::default();
        config.dialog.navigate = true;
        config.ranking.source_roots = vec!["lib".to_string()];
        let params = config.session_params();
        assert!(params.navigate);
        assert_eq!(params.ranking.source_roots, vec!["lib"]);
    }
}
