use serde::Serialize;

use crate::rules::{Rule, Severity, Verdict};

/// A rule's verdict merged with the rule's identity. One per rule per
/// document; created fresh on every lint call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LintResult {
    pub id: &'static str,
    pub name: &'static str,
    pub severity: Severity,
    pub passed: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl LintResult {
    #[must_use]
    pub fn from_verdict(rule: &Rule, verdict: Verdict) -> Self {
        Self {
            id: rule.id,
            name: rule.name,
            severity: rule.severity,
            passed: verdict.passed,
            message: verdict.message,
            suggestion: verdict.suggestion,
            line: verdict.line,
        }
    }

    #[must_use]
    pub fn is_failing_error(&self) -> bool {
        !self.passed && self.severity == Severity::Error
    }

    #[must_use]
    pub fn is_failing_warning(&self) -> bool {
        !self.passed && self.severity == Severity::Warning
    }
}

/// Bucketed counts for one document's results.
///
/// A failing `info`-severity result lands in neither bucket: it stays visible
/// in the raw result list but is uncounted here. That asymmetry is part of
/// the summary's contract (see `summary_ignores_failing_info_rules`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LintSummary {
    pub errors: usize,
    pub warnings: usize,
    pub passed: usize,
}

impl LintSummary {
    #[must_use]
    pub fn from_results(results: &[LintResult]) -> Self {
        results.iter().fold(Self::default(), |mut summary, result| {
            if result.passed {
                summary.passed += 1;
            } else {
                match result.severity {
                    Severity::Error => summary.errors += 1,
                    Severity::Warning => summary.warnings += 1,
                    Severity::Info => {}
                }
            }
            summary
        })
    }
}

/// Percentage of rules passed, `100` for an empty result list.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score(results: &[LintResult]) -> f64 {
    if results.is_empty() {
        return 100.0;
    }
    let passed = results.iter().filter(|result| result.passed).count();
    passed as f64 / results.len() as f64 * 100.0
}

/// Everything a reporting collaborator needs for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LintReport {
    pub file: String,
    pub summary: LintSummary,
    pub score: f64,
    #[serde(rename = "findings")]
    pub results: Vec<LintResult>,
}

impl LintReport {
    #[must_use]
    pub fn has_failing_errors(&self) -> bool {
        self.results.iter().any(LintResult::is_failing_error)
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
