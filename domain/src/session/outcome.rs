//! Dialog outcome value objects

use crate::key::KeyIssue;
use crate::resource::ResourceFile;
use serde::Serialize;
use std::fmt;

/// Everything the caller needs to write the new key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmResult {
    /// Included files, in table order
    pub files: Vec<ResourceFile>,
    pub key: String,
    pub domain: String,
    pub note: String,
    /// Navigate to the written key afterwards
    pub navigate: bool,
}

/// Why a confirm closed the dialog without a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscardReason {
    BlankKey,
    NothingSelected,
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscardReason::BlankKey => write!(f, "key is blank"),
            DiscardReason::NothingSelected => write!(f, "no file selected"),
        }
    }
}

/// How a dialog session ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum DialogOutcome {
    Confirmed(ConfirmResult),
    /// Confirm was pressed but nothing is emitted
    Discarded(DiscardReason),
    Cancelled,
}

impl DialogOutcome {
    pub fn result(&self) -> Option<&ConfirmResult> {
        match self {
            DialogOutcome::Confirmed(result) => Some(result),
            _ => None,
        }
    }

    pub fn into_result(self) -> Option<ConfirmResult> {
        match self {
            DialogOutcome::Confirmed(result) => Some(result),
            _ => None,
        }
    }
}

/// Answer to a confirm request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// Dialog stays open, nothing emitted
    Refused(KeyIssue),
    /// Dialog closed
    Closed(DialogOutcome),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> ConfirmResult {
        ConfirmResult {
            files: vec![ResourceFile::new("translations/messages.en.yml")],
            key: "messages.title".to_string(),
            domain: "messages".to_string(),
            note: "page header".to_string(),
            navigate: true,
        }
    }

    #[test]
    fn test_result_only_for_confirmed() {
        assert!(DialogOutcome::Confirmed(result()).result().is_some());
        assert!(DialogOutcome::Cancelled.result().is_none());
        assert!(DialogOutcome::Discarded(DiscardReason::BlankKey).into_result().is_none());
    }

    #[test]
    fn test_serialize_confirmed() {
        let json = serde_json::to_value(DialogOutcome::Confirmed(result())).unwrap();
        assert_eq!(json["outcome"], "confirmed");
        assert_eq!(json["detail"]["key"], "messages.title");
        assert_eq!(json["detail"]["files"][0]["format"], "yaml");
    }

    #[test]
    fn test_serialize_discarded_and_cancelled() {
        let json = serde_json::to_value(DialogOutcome::Discarded(DiscardReason::NothingSelected))
            .unwrap();
        assert_eq!(json["outcome"], "discarded");
        assert_eq!(json["detail"], "nothing_selected");

        let json = serde_json::to_value(DialogOutcome::Cancelled).unwrap();
        assert_eq!(json["outcome"], "cancelled");
    }
}
