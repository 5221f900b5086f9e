//! Output formatter trait

use super::{ConsoleFormatter, JsonFormatter};
use transkey_domain::{CandidateList, DialogOutcome, OutputFormat};

/// Trait for formatting command results
pub trait OutputFormatter {
    /// Format the ranked candidate table
    fn candidates(&self, candidates: &CandidateList) -> String;

    /// Format how a dialog ended
    fn outcome(&self, outcome: &DialogOutcome) -> String;

    /// Format the known translation domains
    fn domains(&self, domains: &[String]) -> String;
}

/// Formatter for the selected output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
