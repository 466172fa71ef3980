use serde::Serialize;

use crate::error::Result;
use crate::linter::LintReport;

use super::{OutputFormatter, aggregate_summary, average_score};

#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    reports: &'a [LintReport],
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    errors: usize,
    warnings: usize,
    passed: usize,
    average_score: f64,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[LintReport]) -> Result<String> {
        let totals = aggregate_summary(reports);
        let output = JsonOutput {
            summary: Summary {
                total_files: reports.len(),
                errors: totals.errors,
                warnings: totals.warnings,
                passed: totals.passed,
                average_score: average_score(reports),
            },
            reports,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
