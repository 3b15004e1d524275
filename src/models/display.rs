//! Report rendering of a repository snapshot
//!
//! Every format lists the same fields in the same order: one row per
//! snapshot field, label first.

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::Formattable;
use crate::output::formatters::{
    format_datetime, format_optional_datetime, join_languages, or_not_available,
};
use crate::output::json::format_json;
use crate::output::table::format_table;
use crate::snapshot::RepositorySnapshot;

/// One labelled report line
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ReportRow {
    #[tabled(rename = "FIELD")]
    pub label: &'static str,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl ReportRow {
    fn new(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

/// Display model for a snapshot
pub struct SnapshotDisplay<'a> {
    snapshot: &'a RepositorySnapshot,
}

impl<'a> SnapshotDisplay<'a> {
    pub fn new(snapshot: &'a RepositorySnapshot) -> Self {
        Self { snapshot }
    }

    /// Report rows in their fixed order
    pub fn rows(&self) -> Vec<ReportRow> {
        let s = self.snapshot;
        vec![
            ReportRow::new("Repository Name", &s.name),
            ReportRow::new("Owner", &s.owner),
            ReportRow::new("Description", or_not_available(&s.description)),
            ReportRow::new("License", or_not_available(&s.license)),
            ReportRow::new("Date Created", format_datetime(&s.created_at)),
            ReportRow::new("Days Since Creation", s.age_days),
            ReportRow::new("Stars", s.stars),
            ReportRow::new("Forks", s.forks),
            ReportRow::new("Branches", s.samples.branches),
            ReportRow::new("Number of Commits", s.samples.commits),
            ReportRow::new("Total Number of Files", s.samples.files),
            ReportRow::new("Languages Used", join_languages(&s.languages)),
            ReportRow::new("Releases", s.samples.releases),
            ReportRow::new("Workflows (Actions)", s.samples.workflows),
            ReportRow::new("Issues", s.samples.issues),
            ReportRow::new("Pull Requests", s.samples.pulls),
            ReportRow::new("Total Number of Contributors", s.samples.contributors),
            ReportRow::new(
                "Last Commit Date",
                format_optional_datetime(s.last_commit_at.as_ref()),
            ),
            ReportRow::new("Code Frequency", &s.activity_link),
        ]
    }

    fn pretty(&self) -> String {
        self.rows()
            .iter()
            .map(|row| format!("{} {}", format!("{}:", row.label).bold(), row.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Formattable for SnapshotDisplay<'_> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(self.pretty()),
            OutputFormat::Table => Ok(format_table(&self.rows())),
            OutputFormat::Json => Ok(format_json(self.snapshot)?),
        }
    }
}
