//! Interactive extract-key dialog on a line-oriented terminal.
//!
//! The dialog renders the session state, then reads one command per line
//! until the session closes:
//!
//! ```text
//! ═══════════════════════════════════════════════════════════════
//!   Extract translation key
//! ═══════════════════════════════════════════════════════════════
//!
//! Key:      app.greeting  ✗ Key already exists
//! Domain:   messages  (messages, validators)
//! Note:
//! Navigate: no
//!
//!   #         Path                    Name               Create
//!   1  pkg   AppBundle               messages.en.xlf    [ ]
//!   2  yaml  translations/...        messages.en.yml    [ ]
//!
//! transkey>
//! ```
//!
//! End of input cancels the dialog. On a terminal the dialog draws on
//! stderr, leaving stdout to the formatted outcome.

use super::command::{DialogCommand, HELP};
use crate::output::{ConsoleFormatter, OutputFormatter};
use colored::Colorize;
use std::io::{self, BufRead, Stderr, StdinLock, Write};
use thiserror::Error;
use transkey_application::{ExtractKeySession, SessionError};
use transkey_domain::core::string::truncate;
use transkey_domain::{Confirmation, DialogOutcome};

const RULE: &str = "═══════════════════════════════════════════════════════════════";
const NOTE_WIDTH: usize = 60;

/// Errors from running the dialog
#[derive(Error, Debug)]
pub enum DialogError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Line-oriented dialog host, generic over its input and output so it can
/// be driven by a script.
pub struct InteractiveDialog<R, W> {
    input: R,
    output: W,
}

impl InteractiveDialog<StdinLock<'static>, Stderr> {
    /// Dialog reading stdin and drawing on stderr
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> InteractiveDialog<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the dialog, then write the formatted outcome to `results`.
    ///
    /// `results` receives the outcome and nothing else.
    pub fn run_to<O: Write>(
        &mut self,
        session: &mut ExtractKeySession,
        formatter: &dyn OutputFormatter,
        results: &mut O,
    ) -> Result<DialogOutcome, DialogError> {
        let outcome = self.run(session)?;
        let text = formatter.outcome(&outcome);
        write!(results, "{}", text)?;
        if !text.ends_with('\n') {
            writeln!(results)?;
        }
        results.flush()?;
        Ok(outcome)
    }

    /// Run the dialog until the session closes.
    pub fn run(&mut self, session: &mut ExtractKeySession) -> Result<DialogOutcome, DialogError> {
        self.render(session)?;

        loop {
            let Some(line) = self.read_command()? else {
                writeln!(self.output)?;
                return Ok(session.cancel()?);
            };

            match DialogCommand::parse(&line) {
                Ok(command) => {
                    if let Some(outcome) = self.apply(session, command)? {
                        return Ok(outcome);
                    }
                }
                Err(message) => {
                    writeln!(self.output, "{} {}", "⚠".yellow(), message.red())?;
                    writeln!(self.output, "{}", HELP)?;
                }
            }
        }
    }

    fn apply(
        &mut self,
        session: &mut ExtractKeySession,
        command: DialogCommand,
    ) -> Result<Option<DialogOutcome>, DialogError> {
        match command {
            DialogCommand::Empty => {}
            DialogCommand::Help => writeln!(self.output, "{}", HELP)?,
            DialogCommand::Key(text) => {
                session.set_key_text(text)?;
                self.key_line(session)?;
            }
            DialogCommand::Note(note) => {
                session.set_note(note)?;
                self.note_line(session)?;
            }
            DialogCommand::Domain(domain) => {
                if !session.domains().is_empty() && !session.domains().contains(&domain) {
                    writeln!(
                        self.output,
                        "{} Unknown domain '{}'. Known: {}",
                        "⚠".yellow(),
                        domain,
                        session.domains().join(", ")
                    )?;
                } else {
                    session.filter(domain)?;
                    self.domain_line(session)?;
                    self.table(session)?;
                }
            }
            DialogCommand::Toggle(row) => {
                let current = session.candidates().get(row).map(|c| c.is_included());
                match current {
                    Some(included) => {
                        session.toggle(row, !included)?;
                        self.table(session)?;
                    }
                    None => self.no_row(row)?,
                }
            }
            DialogCommand::Include(row, value) => {
                if session.toggle(row, value)? {
                    self.table(session)?;
                } else {
                    self.no_row(row)?;
                }
            }
            DialogCommand::Navigate => {
                session.set_navigate(!session.navigate())?;
                self.navigate_line(session)?;
            }
            DialogCommand::Confirm => match session.confirm()? {
                Confirmation::Refused(issue) => {
                    writeln!(
                        self.output,
                        "{} {}",
                        "✗ Cannot confirm:".red().bold(),
                        issue.to_string().red()
                    )?;
                }
                Confirmation::Closed(outcome) => return Ok(Some(outcome)),
            },
            DialogCommand::Cancel => return Ok(Some(session.cancel()?)),
        }
        Ok(None)
    }

    // ==================== Rendering ====================

    fn render(&mut self, session: &ExtractKeySession) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", RULE.cyan().bold())?;
        writeln!(self.output, "{}", "  Extract translation key".cyan().bold())?;
        writeln!(self.output, "{}", RULE.cyan().bold())?;
        writeln!(self.output)?;

        self.key_line(session)?;
        self.domain_line(session)?;
        self.note_line(session)?;
        self.navigate_line(session)?;
        writeln!(self.output)?;
        self.table(session)?;
        writeln!(self.output, "{}", "Type 'help' for commands.".dimmed())?;
        Ok(())
    }

    fn key_line(&mut self, session: &ExtractKeySession) -> io::Result<()> {
        let status = match session.key_issue() {
            Some(issue) => format!("✗ {}", issue).red().to_string(),
            None if session.key_text().trim().is_empty() => "(empty)".dimmed().to_string(),
            None => "✓".green().to_string(),
        };
        writeln!(
            self.output,
            "{} {}  {}",
            "Key:     ".cyan().bold(),
            session.key_text(),
            status
        )
    }

    fn domain_line(&mut self, session: &ExtractKeySession) -> io::Result<()> {
        let known = if session.domains().is_empty() {
            String::new()
        } else {
            format!("  ({})", session.domains().join(", "))
                .dimmed()
                .to_string()
        };
        writeln!(
            self.output,
            "{} {}{}",
            "Domain:  ".cyan().bold(),
            session.domain(),
            known
        )
    }

    fn note_line(&mut self, session: &ExtractKeySession) -> io::Result<()> {
        writeln!(
            self.output,
            "{} {}",
            "Note:    ".cyan().bold(),
            truncate(session.note(), NOTE_WIDTH)
        )
    }

    fn navigate_line(&mut self, session: &ExtractKeySession) -> io::Result<()> {
        let value = if session.navigate() { "yes" } else { "no" };
        writeln!(self.output, "{} {}", "Navigate:".cyan().bold(), value)
    }

    fn table(&mut self, session: &ExtractKeySession) -> io::Result<()> {
        write!(self.output, "{}", ConsoleFormatter::table(session.candidates()))?;
        if !session.can_confirm() {
            writeln!(
                self.output,
                "{}",
                "Set a new key and check at least one file to confirm.".dimmed()
            )?;
        }
        Ok(())
    }

    fn no_row(&mut self, row: usize) -> io::Result<()> {
        writeln!(
            self.output,
            "{} No row {}",
            "⚠".yellow(),
            row + 1
        )
    }

    /// Read one line; `None` at end of input
    fn read_command(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "{} ", "transkey>".magenta().bold())?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use transkey_application::{
        ExtractKeyRequest, InMemoryTranslationIndex, SessionParams, StaticPackageLocator,
    };
    use crate::output::JsonFormatter;
    use transkey_domain::{DiscardReason, PackageRef, ResourceFile};

    const CONTEXT: &str = "/p/src/AppBundle/Controller/HomeController.php";
    const BUNDLE_XLF: &str = "/p/src/AppBundle/Resources/translations/messages.en.xlf";
    const APP_YML: &str = "/p/translations/messages.en.yml";
    const VALIDATORS_YML: &str = "/p/translations/validators.en.yml";

    fn session(default_key: &str) -> ExtractKeySession {
        let index = InMemoryTranslationIndex::new()
            .with_file("messages", ResourceFile::new(APP_YML))
            .with_file("messages", ResourceFile::new(BUNDLE_XLF))
            .with_file("validators", ResourceFile::new(VALIDATORS_YML))
            .with_key("app.greeting");
        let locator =
            StaticPackageLocator::new(vec![PackageRef::new("AppBundle", "/p/src/AppBundle")]);
        let request = ExtractKeyRequest::new(CONTEXT, "messages")
            .with_project_root("/p")
            .with_default_key(default_key)
            .with_domains(vec!["messages".to_string(), "validators".to_string()]);

        ExtractKeySession::open(
            Arc::new(index),
            Arc::new(locator),
            request,
            SessionParams::default(),
        )
    }

    fn run(script: &str, session: &mut ExtractKeySession) -> (DialogOutcome, String) {
        colored::control::set_override(false);
        let mut dialog = InteractiveDialog::new(script.as_bytes(), Vec::new());
        let outcome = dialog.run(session).unwrap();
        let output = String::from_utf8(dialog.into_output()).unwrap();
        (outcome, output)
    }

    #[test]
    fn test_confirm_selected_row() {
        let mut session = session("app.title");
        let (outcome, output) = run("on 1\nnote home page title\nok\n", &mut session);

        let result = outcome.into_result().unwrap();
        assert_eq!(result.key, "app.title");
        assert_eq!(result.domain, "app");
        assert_eq!(result.note, "home page title");
        assert_eq!(result.files, vec![ResourceFile::new(BUNDLE_XLF)]);
        assert!(output.contains("Extract translation key"));
        assert!(output.contains("[x]"));
    }

    #[test]
    fn test_existing_key_keeps_dialog_open() {
        let mut session = session("app.greeting");
        let (outcome, output) = run("on 2\nok\nkey app.farewell\nok\n", &mut session);

        assert!(output.contains("Cannot confirm: Key already exists"));
        let result = outcome.into_result().unwrap();
        assert_eq!(result.key, "app.farewell");
        assert_eq!(result.files, vec![ResourceFile::new(APP_YML)]);
    }

    #[test]
    fn test_nothing_selected_is_discarded() {
        let mut session = session("app.title");
        let (outcome, _) = run("ok\n", &mut session);
        assert_eq!(
            outcome,
            DialogOutcome::Discarded(DiscardReason::NothingSelected)
        );
        assert!(!session.is_open());
    }

    #[test]
    fn test_domain_switch_rebuilds_table() {
        let mut session = session("email.invalid");
        let (outcome, output) = run("domain validators\nok\n", &mut session);

        // a lone candidate starts out included
        let result = outcome.into_result().unwrap();
        assert_eq!(result.files, vec![ResourceFile::new(VALIDATORS_YML)]);
        assert_eq!(result.domain, "email");
        assert!(output.contains("validators.en.yml"));
    }

    #[test]
    fn test_unknown_domain_is_rejected() {
        let mut session = session("app.title");
        let (_, output) = run("domain admin\nq\n", &mut session);
        assert!(output.contains("Unknown domain 'admin'"));
        assert_eq!(session.domain(), "messages");
    }

    #[test]
    fn test_toggle_and_missing_rows() {
        let mut session = session("app.title");
        let (outcome, output) = run("toggle 1\n2\n1\n9\nok\n", &mut session);

        assert!(output.contains("No row 9"));
        let result = outcome.into_result().unwrap();
        assert_eq!(result.files, vec![ResourceFile::new(APP_YML)]);
    }

    #[test]
    fn test_unknown_command_prints_help() {
        let mut session = session("app.title");
        let (outcome, output) = run("frobnicate\nq\n", &mut session);
        assert_eq!(outcome, DialogOutcome::Cancelled);
        assert!(output.contains("Unknown command: frobnicate"));
        assert!(output.contains("Commands:"));
    }

    #[test]
    fn test_end_of_input_cancels() {
        let mut session = session("app.title");
        let (outcome, _) = run("key app.other\n", &mut session);
        assert_eq!(outcome, DialogOutcome::Cancelled);
        assert!(!session.is_open());
    }

    #[test]
    fn test_json_results_hold_only_the_outcome() {
        colored::control::set_override(false);
        let mut session = session("app.title");
        let mut dialog = InteractiveDialog::new("on 1\nok\n".as_bytes(), Vec::new());
        let mut results = Vec::new();

        let outcome = dialog
            .run_to(&mut session, &JsonFormatter, &mut results)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&results).unwrap();
        assert_eq!(value["outcome"], "confirmed");
        assert_eq!(value["detail"]["key"], "app.title");
        assert_eq!(value["detail"]["files"][0]["path"], BUNDLE_XLF);
        assert!(outcome.result().is_some());

        let drawn = String::from_utf8(dialog.into_output()).unwrap();
        assert!(drawn.contains("Extract translation key"));
        assert!(drawn.contains("transkey>"));
    }

    #[test]
    fn test_text_results_end_with_newline() {
        colored::control::set_override(false);
        let mut session = session("app.title");
        let mut dialog = InteractiveDialog::new("q\n".as_bytes(), Vec::new());
        let mut results = Vec::new();

        dialog
            .run_to(&mut session, &ConsoleFormatter, &mut results)
            .unwrap();

        assert_eq!(String::from_utf8(results).unwrap(), "✗ Cancelled\n");
    }

    #[test]
    fn test_navigate_flag_is_carried() {
        let mut session = session("app.title");
        let (outcome, output) = run("navigate\non 1\nok\n", &mut session);
        assert!(output.contains("Navigate: yes"));
        assert!(outcome.into_result().unwrap().navigate);
    }
}
