use super::*;
use crate::linter::{LintReport, LintResult, LintSummary};
use crate::output::OutputFormatter;
use crate::rules::Severity;

fn make_result(severity: Severity, passed: bool) -> LintResult {
    LintResult {
        id: "SEO-001",
        name: "title-length",
        severity,
        passed,
        message: "Title is 12 characters".to_string(),
        suggestion: (!passed).then(|| "rewrite the title".to_string()),
        line: None,
    }
}

fn make_report(file: &str, results: Vec<LintResult>) -> LintReport {
    let summary = LintSummary::from_results(&results);
    let score = crate::linter::score(&results);
    LintReport {
        file: file.to_string(),
        summary,
        score,
        results,
    }
}

#[test]
fn markdown_has_summary_table() {
    let formatter = MarkdownFormatter::new();
    let reports = vec![make_report("a.md", vec![make_result(Severity::Error, true)])];

    let output = formatter.format(&reports).unwrap();
    assert!(output.contains("## SEO Guard Results"));
    assert!(output.contains("| Files Checked | 1 |"));
    assert!(output.contains("| Average Score | 100 |"));
}

#[test]
fn markdown_details_list_failing_rules_only() {
    let formatter = MarkdownFormatter::new();
    let reports = vec![make_report(
        "a.md",
        vec![
            make_result(Severity::Error, false),
            make_result(Severity::Warning, true),
        ],
    )];

    let output = formatter.format(&reports).unwrap();
    assert!(output.contains("### Details"));
    assert!(output.contains("`a.md`"));
    assert!(output.contains("| error | `title-length` | Title is 12 characters | rewrite the title |"));
}

#[test]
fn markdown_omits_details_when_everything_passes() {
    let formatter = MarkdownFormatter::new();
    let reports = vec![make_report("a.md", vec![make_result(Severity::Error, true)])];

    let output = formatter.format(&reports).unwrap();
    assert!(!output.contains("### Details"));
}
