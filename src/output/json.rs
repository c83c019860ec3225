//! JSON output formatter for machine processing

use crate::domain::Attractiveness;
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    fn report_to_json<'a>(&self, report: &'a Attractiveness) -> JsonReport<'a> {
        JsonReport {
            package: &report.package,
            repository: &report.repository,
            url: &report.url,
            description: (self.verbosity == Verbosity::Verbose && !report.description.is_empty())
                .then_some(report.description.as_str()),
            score: report.score,
            stars: report.stars,
            forks: report.forks,
            followers: report.followers,
            imported_by: report.dependent_count,
        }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// One entry per resolved package
    packages: Vec<JsonReport<'a>>,
    /// Errors encountered
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<JsonError>,
    /// Packages never attempted
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    skipped: &'a [String],
}

/// JSON representation of a package record
#[derive(Serialize)]
struct JsonReport<'a> {
    package: &'a str,
    repository: &'a str,
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    score: u64,
    stars: u64,
    forks: u64,
    followers: u64,
    imported_by: u64,
}

/// JSON representation of a failure
#[derive(Serialize)]
struct JsonError {
    /// Stage-prefixed message
    message: String,
    /// Hosting API status code, when one was received
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            packages: result
                .reports
                .iter()
                .map(|r| self.report_to_json(r))
                .collect(),
            errors: result
                .errors
                .iter()
                .map(|e| JsonError {
                    message: e.to_string(),
                    status: e.status(),
                })
                .collect(),
            skipped: &result.skipped,
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }

    fn format_report(
        &self,
        report: &Attractiveness,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&self.report_to_json(report))
            .map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
