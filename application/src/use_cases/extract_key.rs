//! Extract key use case.
//!
//! Drives one "extract string into translation key" dialog. The host UI
//! forwards user events (key edits, checkbox toggles, domain switches,
//! confirm/cancel) to an [`ExtractKeySession`] and renders what it exposes.
//!
//! # Flow
//!
//! ```text
//! open(default key, default domain)
//!        ↓
//! set_key_text / set_note / toggle / filter   (any number of times)
//!        ↓
//! confirm()
//!   ├─ key exists      → Refused, session stays open
//!   ├─ key blank       → Closed(Discarded(BlankKey))
//!   ├─ nothing checked → Closed(Discarded(NothingSelected))
//!   └─ otherwise       → Closed(Confirmed(result))
//! cancel()             → Cancelled
//! ```

use crate::config::SessionParams;
use crate::ports::package_locator::PackageLocatorPort;
use crate::ports::translation_index::TranslationIndexPort;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use transkey_domain::key::{domain_of_key, is_blank};
use transkey_domain::table::{self, CellValue};
use transkey_domain::{
    CandidateList, ConfirmResult, Confirmation, DialogOutcome, DiscardReason, KeyIssue,
    PackageRef, RankingContext, build_candidates, validate_key,
};

/// Errors from driving a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Dialog session is closed")]
    Closed,
}

/// Input for [`ExtractKeySession::open`].
#[derive(Debug, Clone)]
pub struct ExtractKeyRequest {
    /// File the literal was found in
    pub context_file: PathBuf,
    /// Root that candidate paths are shown relative to
    pub project_root: Option<PathBuf>,
    /// Pre-filled key text
    pub default_key: Option<String>,
    /// Domain whose files are listed first
    pub default_domain: String,
    /// Domains offered for switching the filter
    pub domains: Vec<String>,
}

impl ExtractKeyRequest {
    pub fn new(context_file: impl Into<PathBuf>, default_domain: impl Into<String>) -> Self {
        Self {
            context_file: context_file.into(),
            project_root: None,
            default_key: None,
            default_domain: default_domain.into(),
            domains: Vec::new(),
        }
    }

    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    pub fn with_default_key(mut self, key: impl Into<String>) -> Self {
        self.default_key = Some(key.into());
        self
    }

    pub fn with_domains(mut self, domains: Vec<String>) -> Self {
        self.domains = domains;
        self
    }
}

/// State of one extract-key dialog.
pub struct ExtractKeySession {
    index: Arc<dyn TranslationIndexPort>,
    locator: Arc<dyn PackageLocatorPort>,
    params: SessionParams,
    project_root: Option<PathBuf>,
    context_package: Option<PackageRef>,
    domains: Vec<String>,
    domain: String,
    key_text: String,
    key_issue: Option<KeyIssue>,
    note: String,
    navigate: bool,
    candidates: CandidateList,
    open: bool,
}

impl ExtractKeySession {
    /// Open a session: pre-fill the key, list the default domain's files and
    /// run the first validation pass.
    pub fn open(
        index: Arc<dyn TranslationIndexPort>,
        locator: Arc<dyn PackageLocatorPort>,
        request: ExtractKeyRequest,
        params: SessionParams,
    ) -> Self {
        let context_package = locator.containing_package(&request.context_file);
        debug!(
            "Context file {:?} belongs to package {:?}",
            request.context_file,
            context_package.as_ref().map(|p| p.name())
        );

        let navigate = params.navigate;
        let mut session = Self {
            index,
            locator,
            params,
            project_root: request.project_root,
            context_package,
            domains: request.domains,
            domain: String::new(),
            key_text: request.default_key.unwrap_or_default(),
            key_issue: None,
            note: String::new(),
            navigate,
            candidates: CandidateList::default(),
            open: true,
        };

        session.rebuild(request.default_domain);
        session.revalidate();
        session
    }

    // ==================== Accessors ====================

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Active domain filter
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Domains offered for switching the filter
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn key_text(&self) -> &str {
        &self.key_text
    }

    /// Live advisory for the current key text
    pub fn key_issue(&self) -> Option<KeyIssue> {
        self.key_issue
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn navigate(&self) -> bool {
        self.navigate
    }

    pub fn context_package(&self) -> Option<&PackageRef> {
        self.context_package.as_ref()
    }

    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    /// Candidates projected through the table columns
    pub fn rows(&self) -> Vec<Vec<CellValue>> {
        table::project(self.candidates.as_slice())
    }

    /// Whether confirm would emit a result right now.
    ///
    /// Hosts can use this to disable the confirm control instead of relying
    /// on confirm silently closing the dialog.
    pub fn can_confirm(&self) -> bool {
        self.open
            && self.key_issue.is_none()
            && !is_blank(&self.key_text)
            && self.candidates.any_included()
    }

    // ==================== User events ====================

    /// Replace the key text and re-run validation.
    pub fn set_key_text(&mut self, text: impl Into<String>) -> Result<Option<KeyIssue>, SessionError> {
        self.ensure_open()?;
        self.key_text = text.into();
        self.revalidate();
        Ok(self.key_issue)
    }

    pub fn set_note(&mut self, note: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.note = note.into();
        Ok(())
    }

    pub fn set_navigate(&mut self, navigate: bool) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.navigate = navigate;
        Ok(())
    }

    /// Switch the domain filter, discarding all current candidates.
    pub fn filter(&mut self, domain: impl Into<String>) -> Result<&CandidateList, SessionError> {
        self.ensure_open()?;
        self.rebuild(domain.into());
        Ok(&self.candidates)
    }

    /// Set the include flag of table row `row`. `Ok(false)` if there is no such row.
    pub fn toggle(&mut self, row: usize, value: bool) -> Result<bool, SessionError> {
        self.ensure_open()?;
        let Some(candidate) = self.candidates.get_mut(row) else {
            return Ok(false);
        };
        Ok(table::COLUMNS[table::CREATE_COLUMN].set(candidate, value))
    }

    /// Confirm the dialog.
    pub fn confirm(&mut self) -> Result<Confirmation, SessionError> {
        self.ensure_open()?;

        self.revalidate();
        if let Some(issue) = self.key_issue {
            info!("Refusing confirm for '{}': {}", self.key_text, issue);
            return Ok(Confirmation::Refused(issue));
        }

        let outcome = if is_blank(&self.key_text) {
            DialogOutcome::Discarded(DiscardReason::BlankKey)
        } else {
            let files = self.candidates.included_files();
            if files.is_empty() {
                DialogOutcome::Discarded(DiscardReason::NothingSelected)
            } else {
                let domain = domain_of_key(&self.key_text)
                    .unwrap_or(&self.domain)
                    .to_string();
                info!(
                    "Confirmed key '{}' (domain '{}') for {} file(s)",
                    self.key_text,
                    domain,
                    files.len()
                );
                DialogOutcome::Confirmed(ConfirmResult {
                    files,
                    key: self.key_text.clone(),
                    domain,
                    note: self.note.clone(),
                    navigate: self.navigate,
                })
            }
        };

        if let DialogOutcome::Discarded(reason) = &outcome {
            warn!("Closing dialog without a result: {}", reason);
        }

        self.open = false;
        Ok(Confirmation::Closed(outcome))
    }

    /// Cancel the dialog (cancel button, escape, window close).
    pub fn cancel(&mut self) -> Result<DialogOutcome, SessionError> {
        self.ensure_open()?;
        self.open = false;
        debug!("Dialog cancelled");
        Ok(DialogOutcome::Cancelled)
    }

    // ==================== Internals ====================

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.open {
            Ok(())
        } else {
            Err(SessionError::Closed)
        }
    }

    fn revalidate(&mut self) {
        let index = &self.index;
        self.key_issue = validate_key(&self.key_text, |key| index.key_exists(key));
    }

    fn rebuild(&mut self, domain: String) {
        let files = self.index.domain_files(&domain);
        let ctx = RankingContext {
            context_package: self.context_package.as_ref(),
            project_root: self.project_root.as_deref(),
            rules: &self.params.ranking,
        };
        let locator = &self.locator;
        let candidates =
            build_candidates(files, &ctx, |file| locator.containing_package(file.path()));

        debug!(
            "Domain '{}': {} candidate(s), {} preselected",
            domain,
            candidates.len(),
            candidates.collect_included().len()
        );

        self.candidates = candidates;
        self.domain = domain;
    }
}
