use super::*;
use crate::frontmatter::FrontMatter;

#[test]
fn verdict_pass_carries_a_message() {
    let verdict = Verdict::pass("all good");
    assert!(verdict.passed);
    assert_eq!(verdict.message, "all good");
    assert!(verdict.suggestion.is_none());
    assert!(verdict.line.is_none());
}

#[test]
fn verdict_builders_attach_suggestion_and_line() {
    let verdict = Verdict::fail("broken")
        .with_suggestion("fix it")
        .with_line(12);
    assert!(!verdict.passed);
    assert_eq!(verdict.suggestion.as_deref(), Some("fix it"));
    assert_eq!(verdict.line, Some(12));
}

#[test]
fn severity_displays_lowercase() {
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Warning.to_string(), "warning");
    assert_eq!(Severity::Info.to_string(), "info");
}

#[test]
fn rule_check_delegates_to_its_closure() {
    let rule = Rule::new("T-001", "test", "a test rule", Severity::Info, |doc| {
        Verdict::pass(format!("body has {} bytes", doc.body.len()))
    });
    let frontmatter = FrontMatter::new();
    let document = Document {
        content: "hello",
        frontmatter: &frontmatter,
        body: "hello",
        filename: None,
        body_start_line: 0,
    };
    assert_eq!(rule.check(&document).message, "body has 5 bytes");
}

#[test]
fn rule_debug_shows_identity_not_closure() {
    let rule = Rule::new("T-001", "test", "a test rule", Severity::Info, |_| {
        Verdict::pass("ok")
    });
    let debug = format!("{rule:?}");
    assert!(debug.contains("T-001"));
}
