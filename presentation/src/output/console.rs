//! Console output formatter

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use transkey_domain::core::string::truncate_start;
use transkey_domain::table::{self, COLUMNS, CellValue, Column, Marker};
use transkey_domain::{CandidateList, ConfirmResult, DialogOutcome};

/// Approximate pixels per terminal cell when mapping column widths
const PX_PER_CHAR: usize = 6;
/// Width of the column that fills the remaining space
const FILL_WIDTH: usize = 48;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render the candidate table, one numbered row per candidate
    pub fn table(candidates: &CandidateList) -> String {
        if candidates.is_empty() {
            return format!("{}\n", "(no candidate files for this domain)".dimmed());
        }

        let widths: Vec<usize> = COLUMNS.iter().map(column_width).collect();

        let header: Vec<String> = COLUMNS
            .iter()
            .zip(&widths)
            .map(|(column, width)| format!("{:<width$}", column.label, width = *width))
            .collect();
        let mut output = format!("{}\n", format!("{:>3}  {}", "#", header.join("  ")).bold());

        for (i, row) in table::project(candidates.as_slice()).iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| cell_text(cell, *width))
                .collect();
            output.push_str(&format!("{:>3}  {}\n", i + 1, cells.join("  ")));
        }

        output
    }

    fn confirmed(result: &ConfirmResult) -> String {
        let mut output = format!(
            "{} {} {}\n",
            "✓ Key".green().bold(),
            result.key.bold(),
            format!("(domain {})", result.domain).dimmed()
        );
        for file in &result.files {
            output.push_str(&format!("  → {}\n", file.path().display()));
        }
        if !result.note.is_empty() {
            output.push_str(&format!("{} {}\n", "Note:".cyan().bold(), result.note));
        }
        if result.navigate {
            output.push_str(&format!("{}\n", "Navigate to the new key".dimmed()));
        }
        output
    }
}

fn column_width(column: &Column) -> usize {
    column
        .width
        .map(|px| usize::from(px) / PX_PER_CHAR)
        .unwrap_or(FILL_WIDTH)
        .max(column.label.len())
}

fn cell_text(cell: &CellValue, width: usize) -> String {
    match cell {
        CellValue::Marker(Marker::Package) => format!("{:<width$}", "pkg").green().bold().to_string(),
        CellValue::Marker(Marker::Format(format)) => {
            format!("{:<width$}", format.as_str()).dimmed().to_string()
        }
        CellValue::Text(text) => format!("{:<width$}", truncate_start(text, width)),
        CellValue::Flag(true) => format!("{:<width$}", "[x]").green().to_string(),
        CellValue::Flag(false) => format!("{:<width$}", "[ ]"),
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn candidates(&self, candidates: &CandidateList) -> String {
        Self::table(candidates)
    }

    fn outcome(&self, outcome: &DialogOutcome) -> String {
        match outcome {
            DialogOutcome::Confirmed(result) => Self::confirmed(result),
            DialogOutcome::Discarded(reason) => format!(
                "{} {}\n",
                "⚠ Closed without a result:".yellow().bold(),
                reason
            ),
            DialogOutcome::Cancelled => format!("{}\n", "✗ Cancelled".dimmed()),
        }
    }

    fn domains(&self, domains: &[String]) -> String {
        if domains.is_empty() {
            return format!("{}\n", "(no translation domains found)".dimmed());
        }
        domains.iter().map(|d| format!("{}\n", d)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transkey_domain::{
        DiscardReason, PackageRef, RankingContext, RankingRules, ResourceFile, build_candidates,
    };

    fn plain() {
        colored::control::set_override(false);
    }

    fn ranked() -> CandidateList {
        let package = PackageRef::new("AppBundle", "/p/src/AppBundle");
        let rules = RankingRules::default();
        let ctx = RankingContext {
            context_package: Some(&package),
            project_root: Some(std::path::Path::new("/p")),
            rules: &rules,
        };
        let files = vec![
            ResourceFile::new("/p/translations/messages.en.yml"),
            ResourceFile::new("/p/src/AppBundle/Resources/translations/messages.en.xlf"),
        ];
        build_candidates(files, &ctx, |f| {
            package.contains(f.path()).then(|| package.clone())
        })
    }

    #[test]
    fn test_table_rows_follow_ranking() {
        plain();
        let output = ConsoleFormatter::table(&ranked());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Path"));
        assert!(lines[0].contains("Create"));
        assert!(lines[1].trim_start().starts_with("1  pkg"));
        assert!(lines[1].contains("AppBundle"));
        assert!(lines[1].contains("messages.en.xlf"));
        assert!(lines[2].contains("yaml"));
        assert!(lines[2].contains("translations/messages.en.yml"));
        assert!(lines[2].trim_end().ends_with("[ ]"));
    }

    #[test]
    fn test_empty_table() {
        plain();
        let output = ConsoleFormatter.candidates(&CandidateList::default());
        assert!(output.contains("no candidate files"));
    }

    #[test]
    fn test_column_widths() {
        let widths: Vec<usize> = COLUMNS.iter().map(column_width).collect();
        assert_eq!(widths, vec![5, FILL_WIDTH, 31, 8]);
    }

    #[test]
    fn test_long_paths_keep_their_end() {
        plain();
        let cell = cell_text(
            &CellValue::Text("vendor/acme/very/deep/tree/Resources/translations/messages.en.yml".into()),
            24,
        );
        assert_eq!(cell.len(), 24);
        assert!(cell.starts_with("..."));
        assert!(cell.ends_with("messages.en.yml"));
    }

    #[test]
    fn test_outcomes() {
        plain();
        let confirmed = DialogOutcome::Confirmed(ConfirmResult {
            files: vec![ResourceFile::new("/p/translations/messages.en.yml")],
            key: "app.greeting".to_string(),
            domain: "app".to_string(),
            note: "shown on the home page".to_string(),
            navigate: false,
        });
        let output = ConsoleFormatter.outcome(&confirmed);
        assert!(output.contains("app.greeting"));
        assert!(output.contains("(domain app)"));
        assert!(output.contains("/p/translations/messages.en.yml"));
        assert!(output.contains("shown on the home page"));
        assert!(!output.contains("Navigate"));

        let output = ConsoleFormatter.outcome(&DialogOutcome::Discarded(DiscardReason::BlankKey));
        assert!(output.contains("key is blank"));

        let output = ConsoleFormatter.outcome(&DialogOutcome::Cancelled);
        assert!(output.contains("Cancelled"));
    }

    #[test]
    fn test_domains() {
        plain();
        let output = ConsoleFormatter.domains(&["messages".to_string(), "validators".to_string()]);
        assert_eq!(output, "messages\nvalidators\n");
        assert!(ConsoleFormatter.domains(&[]).contains("no translation domains"));
    }
}
