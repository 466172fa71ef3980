use std::fmt::Write;

use crate::error::Result;
use crate::linter::LintReport;

use super::{OutputFormatter, aggregate_summary, average_score};

#[derive(Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, reports: &[LintReport]) -> Result<String> {
        let mut output = String::new();
        let totals = aggregate_summary(reports);

        writeln!(output, "## SEO Guard Results\n").ok();
        writeln!(output, "| Metric | Count |").ok();
        writeln!(output, "|--------|------:|").ok();
        writeln!(output, "| Files Checked | {} |", reports.len()).ok();
        writeln!(output, "| ❌ Errors | {} |", totals.errors).ok();
        writeln!(output, "| ⚠️ Warnings | {} |", totals.warnings).ok();
        writeln!(output, "| ✅ Passed | {} |", totals.passed).ok();
        writeln!(output, "| Average Score | {:.0} |", average_score(reports)).ok();
        writeln!(output).ok();

        let flagged: Vec<_> = reports
            .iter()
            .filter(|report| report.results.iter().any(|result| !result.passed))
            .collect();

        if !flagged.is_empty() {
            writeln!(output, "### Details\n").ok();
            for report in flagged {
                writeln!(output, "#### `{}` (score: {:.0})\n", report.file, report.score).ok();
                writeln!(output, "| Severity | Rule | Message | Suggestion |").ok();
                writeln!(output, "|:--------:|------|---------|------------|").ok();
                for result in report.results.iter().filter(|result| !result.passed) {
                    writeln!(
                        output,
                        "| {} | `{}` | {} | {} |",
                        result.severity,
                        result.name,
                        result.message,
                        result.suggestion.as_deref().unwrap_or("-")
                    )
                    .ok();
                }
                writeln!(output).ok();
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
