mod json;
mod markdown;
mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::linter::{LintReport, LintSummary};

/// Trait for formatting lint reports into various output formats.
pub trait OutputFormatter {
    /// Format the lint reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[LintReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Sum of per-file summaries, for the aggregate line every formatter prints.
#[must_use]
pub fn aggregate_summary(reports: &[LintReport]) -> LintSummary {
    reports.iter().fold(LintSummary::default(), |mut acc, report| {
        acc.errors += report.summary.errors;
        acc.warnings += report.summary.warnings;
        acc.passed += report.summary.passed;
        acc
    })
}

/// Mean score across reports, `100` when there are none.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_score(reports: &[LintReport]) -> f64 {
    if reports.is_empty() {
        return 100.0;
    }
    reports.iter().map(|report| report.score).sum::<f64>() / reports.len() as f64
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
