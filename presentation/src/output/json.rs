//! JSON output formatter

use super::formatter::OutputFormatter;
use serde::Serialize;
use transkey_domain::{CandidateList, DialogOutcome};

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn candidates(&self, candidates: &CandidateList) -> String {
        Self::to_json(candidates)
    }

    fn outcome(&self, outcome: &DialogOutcome) -> String {
        Self::to_json(outcome)
    }

    fn domains(&self, domains: &[String]) -> String {
        Self::to_json(domains)
    }
}
