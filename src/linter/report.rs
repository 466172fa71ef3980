use crate::frontmatter::FrontMatter;

use super::{LintReport, LintSummary, Linter, score};

/// Optional inputs for building a [`LintReport`].
#[derive(Debug, Default)]
pub struct ReportOptions<'a> {
    /// Pre-parsed front matter; the evaluator extracts its own when absent.
    pub frontmatter: Option<FrontMatter>,
    /// Full path of the document, used as the report label.
    pub file_path: Option<&'a str>,
    /// Bare filename, used for filename-dependent rules and as the label
    /// fallback.
    pub filename: Option<&'a str>,
}

impl Linter {
    /// Lint `content` and package results, summary, and score into one
    /// report. The label falls back to `"unknown"` when neither a path nor a
    /// filename was supplied.
    #[must_use]
    pub fn report(&self, content: &str, options: ReportOptions<'_>) -> LintReport {
        let label = options
            .file_path
            .or(options.filename)
            .unwrap_or("unknown")
            .to_string();
        let filename = options.filename.or(options.file_path);

        let results = self.lint(content, options.frontmatter, filename);
        let summary = LintSummary::from_results(&results);
        let score = score(&results);

        LintReport {
            file: label,
            summary,
            score,
            results,
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
