use super::*;
use crate::frontmatter::FrontMatter;
use crate::rules::Document;

fn doc<'a>(frontmatter: &'a FrontMatter, body: &'a str) -> Document<'a> {
    Document {
        content: body,
        frontmatter,
        body,
        filename: None,
        body_start_line: 0,
    }
}

// Single H1

#[test]
fn body_h1_fails_with_count() {
    let fm = FrontMatter::new();
    let body = "# Another Heading\n\nSome text.\n";
    let verdict = single_h1().check(&doc(&fm, body));
    assert!(!verdict.passed);
    assert!(verdict.message.contains('1'));
}

#[test]
fn multiple_h1_headings_are_counted() {
    let fm = FrontMatter::new();
    let body = "# One\n\ntext\n\n# Two\n";
    let verdict = single_h1().check(&doc(&fm, body));
    assert!(verdict.message.contains('2'));
}

#[test]
fn h2_and_deeper_are_fine() {
    let fm = FrontMatter::new();
    let body = "## Section\n\n### Subsection\n";
    assert!(single_h1().check(&doc(&fm, body)).passed);
}

#[test]
fn inline_hash_is_not_a_heading() {
    let fm = FrontMatter::new();
    let body = "Issue # 12 is closed.\n#hashtag\n";
    assert!(single_h1().check(&doc(&fm, body)).passed);
}

// Heading hierarchy

#[test]
fn h2_to_h4_jump_fails() {
    let fm = FrontMatter::new();
    let body = "## A\n\ntext\n\n#### B\n";
    let verdict = heading_hierarchy().check(&doc(&fm, body));
    assert!(!verdict.passed);
    assert!(verdict.message.contains("H2"));
    assert!(verdict.message.contains("H4"));
}

#[test]
fn jump_is_judged_against_previous_heading_only() {
    // H4 is one deeper than the H3 seen earlier, but the comparison is
    // against the H2 directly before it.
    let fm = FrontMatter::new();
    let body = "## A\n### B\n## C\n#### D\n";
    let verdict = heading_hierarchy().check(&doc(&fm, body));
    assert!(!verdict.passed);
    assert!(verdict.message.contains("H2 to H4"));
}

#[test]
fn descending_one_level_at_a_time_passes() {
    let fm = FrontMatter::new();
    let body = "## A\n### B\n#### C\n## D\n### E\n";
    assert!(heading_hierarchy().check(&doc(&fm, body)).passed);
}

#[test]
fn first_heading_has_no_predecessor_to_jump_from() {
    let fm = FrontMatter::new();
    let body = "#### Deep start\n\ntext\n";
    assert!(heading_hierarchy().check(&doc(&fm, body)).passed);
}

#[test]
fn jump_reports_the_offending_line() {
    let fm = FrontMatter::new();
    let body = "## A\n\n#### B\n";
    let verdict = heading_hierarchy().check(&doc(&fm, body));
    assert_eq!(verdict.line, Some(3));
}

#[test]
fn jump_line_accounts_for_stripped_front_matter() {
    let fm = FrontMatter::new();
    let mut document = doc(&fm, "## A\n\n#### B\n");
    document.body_start_line = 7;
    let verdict = heading_hierarchy().check(&document);
    assert_eq!(verdict.line, Some(10));
}

// Opening keyword

#[test]
fn keyword_in_opening_passes() {
    let fm = FrontMatter::new();
    let body = "GTM as Code keeps campaigns in version control.\n";
    let verdict = opening_keyword().check(&doc(&fm, body));
    assert!(verdict.passed);
    assert!(verdict.message.contains("gtm as code"));
}

#[test]
fn keyword_past_first_hundred_words_fails() {
    let fm = FrontMatter::new();
    let body = format!("{}gtm as code", "word ".repeat(120));
    assert!(!opening_keyword().check(&doc(&fm, &body)).passed);
}

#[test]
fn keyword_spanning_whitespace_is_normalized() {
    let fm = FrontMatter::new();
    let body = "Teams adopting GTM  as\ncode ship faster.\n";
    // Collapsed whitespace still matches the two-word keyword.
    assert!(opening_keyword().check(&doc(&fm, body)).passed);
}

// Internal links

#[test]
fn absolute_path_link_counts_as_internal() {
    let fm = FrontMatter::new();
    let body = "See the [pipeline playbook](/playbooks/pipeline).\n";
    assert!(internal_links().check(&doc(&fm, body)).passed);
}

#[test]
fn fragment_link_counts_as_internal() {
    let fm = FrontMatter::new();
    let body = "Jump to [setup](#setup).\n";
    assert!(internal_links().check(&doc(&fm, body)).passed);
}

#[test]
fn external_links_only_fails() {
    let fm = FrontMatter::new();
    let body = "Read [the docs](https://docs.example.org).\n";
    assert!(!internal_links().check(&doc(&fm, body)).passed);
}

#[test]
fn no_links_at_all_fails() {
    let fm = FrontMatter::new();
    assert!(!internal_links().check(&doc(&fm, "Plain text.\n")).passed);
}

// Descriptive link text

#[test]
fn click_here_anchor_fails_naming_the_text() {
    let fm = FrontMatter::new();
    let body = "[click here](https://x.com)\n";
    let verdict = descriptive_link_text().check(&doc(&fm, body));
    assert!(!verdict.passed);
    assert!(verdict.message.contains("click here"));
}

#[test]
fn generic_anchors_fail_case_insensitively() {
    let fm = FrontMatter::new();
    for anchor in ["Here", "LINK", "Read More", " click here "] {
        let body = format!("[{anchor}](/target)\n");
        let verdict = descriptive_link_text().check(&doc(&fm, &body));
        assert!(!verdict.passed, "{anchor:?} should fail");
    }
}

#[test]
fn bare_url_anchor_fails() {
    let fm = FrontMatter::new();
    for anchor in ["https://example.org", "http://x.com", "www.site.com"] {
        let body = format!("[{anchor}](/target)\n");
        assert!(!descriptive_link_text().check(&doc(&fm, &body)).passed);
    }
}

#[test]
fn descriptive_anchor_passes() {
    let fm = FrontMatter::new();
    let body = "[campaign review checklist](/guides/reviews)\n";
    assert!(descriptive_link_text().check(&doc(&fm, body)).passed);
}

#[test]
fn image_alt_text_is_not_anchor_text() {
    let fm = FrontMatter::new();
    let body = "![here](/images/chart.png)\n";
    assert!(descriptive_link_text().check(&doc(&fm, body)).passed);
}
