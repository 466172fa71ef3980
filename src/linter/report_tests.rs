use super::*;
use crate::linter::{LintSummary, Linter, score};

#[test]
fn report_label_prefers_the_file_path() {
    let linter = Linter::new();
    let report = linter.report(
        "body",
        ReportOptions {
            frontmatter: None,
            file_path: Some("content/posts/2025-01-15-short.md"),
            filename: Some("2025-01-15-short.md"),
        },
    );
    assert_eq!(report.file, "content/posts/2025-01-15-short.md");
}

#[test]
fn report_label_falls_back_to_the_filename() {
    let linter = Linter::new();
    let report = linter.report(
        "body",
        ReportOptions {
            frontmatter: None,
            file_path: None,
            filename: Some("2025-01-15-short.md"),
        },
    );
    assert_eq!(report.file, "2025-01-15-short.md");
}

#[test]
fn report_label_defaults_to_unknown() {
    let linter = Linter::new();
    let report = linter.report("body", ReportOptions::default());
    assert_eq!(report.file, "unknown");
}

#[test]
fn report_combines_results_summary_and_score() {
    let linter = Linter::new();
    let report = linter.report("body", ReportOptions::default());

    assert_eq!(report.results.len(), linter.registry().len());
    let expected = LintSummary::from_results(&report.results);
    assert_eq!(report.summary, expected);
    assert!((report.score - score(&report.results)).abs() < f64::EPSILON);
}

#[test]
fn filename_rules_see_the_path_when_no_filename_is_given() {
    let linter = Linter::new();
    let content = "---\ndate: 2025-01-15\n---\nbody\n";
    let report = linter.report(
        content,
        ReportOptions {
            frontmatter: None,
            file_path: Some("posts/2025-01-15-launch.md"),
            filename: None,
        },
    );
    let filename_result = report
        .results
        .iter()
        .find(|result| result.id == "SEO-006")
        .unwrap();
    assert!(filename_result.passed, "{}", filename_result.message);
}
