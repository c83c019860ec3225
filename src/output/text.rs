//! Text output formatter for human-readable display
//!
//! One block per package:
//!
//! ```text
//! - dev-go
//!   Score:       11
//!   Package:     github.com/KEINOS/dev-go/cmd
//!   URL:         https://github.com/KEINOS/dev-go
//!   Stars:       11
//!   Forks:       2
//!   Follows:     2
//!   Imported by: 0
//! ```

use crate::domain::Attractiveness;
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Label/value rows of a report, in display order
    fn rows(&self, report: &Attractiveness) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Score", report.score.to_string()),
            ("Package", report.package.clone()),
            ("URL", report.url.clone()),
            ("Stars", report.stars.to_string()),
            ("Forks", report.forks.to_string()),
            ("Follows", report.followers.to_string()),
            ("Imported by", report.dependent_count.to_string()),
        ];
        if self.verbosity == Verbosity::Verbose && !report.description.is_empty() {
            rows.push(("Description", report.description.clone()));
        }
        rows
    }

    /// Write one error line
    fn format_error(&self, message: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.color {
            writeln!(writer, "{} {}", "error:".red().bold(), message)
        } else {
            writeln!(writer, "error: {}", message)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        for report in &result.reports {
            self.format_report(report, writer)?;
        }

        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        for error in &result.errors {
            self.format_error(&error.to_string(), writer)?;
        }

        if !result.skipped.is_empty() {
            let message = format!("not attempted: {}", result.skipped.join(", "));
            if self.color {
                writeln!(writer, "{}", message.dimmed())?;
            } else {
                writeln!(writer, "{}", message)?;
            }
        }

        Ok(())
    }

    fn format_report(
        &self,
        report: &Attractiveness,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return writeln!(writer, "{}\t{}", report.score, report.package);
        }

        if self.color {
            writeln!(writer, "- {}", report.repository.bold())?;
        } else {
            writeln!(writer, "- {}", report.repository)?;
        }

        let rows = self.rows(report);
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;

        for (label, value) in rows {
            let label = format!("{}:", label);
            if self.color && label == "Score:" {
                writeln!(writer, "  {:width$} {}", label, value.green().bold(), width = width)?;
            } else {
                writeln!(writer, "  {:width$} {}", label, value, width = width)?;
            }
        }

        Ok(())
    }
}
