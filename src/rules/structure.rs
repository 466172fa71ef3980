//! Document-structure rules: headings, opening keyword, links.

use regex::Regex;

use super::vocab;
use super::{Rule, Severity, Verdict};

const OPENING_WORD_COUNT: usize = 100;

fn link_pattern() -> Regex {
    Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("Invalid regex")
}

/// Markdown links in `body`, excluding images (`![...](...)`).
fn markdown_links<'a>(pattern: &Regex, body: &'a str) -> Vec<(&'a str, &'a str)> {
    pattern
        .captures_iter(body)
        .filter(|captures| {
            let start = captures.get(0).map_or(0, |m| m.start());
            start == 0 || body.as_bytes()[start - 1] != b'!'
        })
        .map(|captures| {
            let text = captures.get(1).map_or("", |m| m.as_str());
            let target = captures.get(2).map_or("", |m| m.as_str());
            (text, target)
        })
        .collect()
}

pub fn single_h1() -> Rule {
    Rule::new(
        "SEO-007",
        "single-h1",
        "The body must not carry H1 headings; the H1 comes from the title",
        Severity::Error,
        |doc| {
            let count = doc
                .body
                .lines()
                .filter(|line| line.starts_with("# "))
                .count();
            if count > 0 {
                return Verdict::fail(format!("Found {count} H1 heading(s) in the body"))
                    .with_suggestion("Demote body headings to ## or deeper");
            }
            Verdict::pass("No H1 headings in the body")
        },
    )
}

pub fn heading_hierarchy() -> Rule {
    Rule::new(
        "SEO-008",
        "heading-hierarchy",
        "Heading levels must not skip a level between consecutive headings",
        Severity::Warning,
        |doc| {
            let mut previous: Option<usize> = None;
            for (index, line) in doc.body.lines().enumerate() {
                let Some(level) = heading_level(line) else {
                    continue;
                };
                // Each heading is judged against the one directly before it,
                // not against the deepest level seen so far.
                if let Some(previous) = previous
                    && level > previous + 1
                {
                    return Verdict::fail(format!(
                        "Heading level jumps from H{previous} to H{level}"
                    ))
                    .with_suggestion(format!("Insert an H{} or flatten the deeper heading", previous + 1))
                    .with_line(doc.body_start_line + index + 1);
                }
                previous = Some(level);
            }
            Verdict::pass("Heading levels descend one step at a time")
        },
    )
}

pub fn opening_keyword() -> Rule {
    Rule::new(
        "SEO-009",
        "opening-keyword",
        "The first 100 words must mention a primary keyword",
        Severity::Warning,
        |doc| {
            let opening = doc
                .body
                .split_whitespace()
                .take(OPENING_WORD_COUNT)
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();
            match vocab::find_primary_keyword(&opening) {
                Some(keyword) => {
                    Verdict::pass(format!("Opening mentions \"{keyword}\""))
                }
                None => Verdict::fail(format!(
                    "The first {OPENING_WORD_COUNT} words mention no primary keyword"
                ))
                .with_suggestion("Introduce a primary keyword in the opening paragraph"),
            }
        },
    )
}

pub fn internal_links() -> Rule {
    let pattern = link_pattern();
    Rule::new(
        "SEO-010",
        "internal-links",
        "The body must contain at least one internal link",
        Severity::Warning,
        move |doc| {
            let internal = markdown_links(&pattern, doc.body)
                .iter()
                .filter(|(_, target)| {
                    let target = target.trim();
                    target.starts_with('/') || target.starts_with('#')
                })
                .count();
            if internal == 0 {
                return Verdict::fail("No internal links found in the body")
                    .with_suggestion("Link to at least one related page on this site");
            }
            Verdict::pass(format!("Found {internal} internal link(s)"))
        },
    )
}

pub fn descriptive_link_text() -> Rule {
    let pattern = link_pattern();
    Rule::new(
        "SEO-011",
        "descriptive-link-text",
        "Link anchor text must describe its target",
        Severity::Warning,
        move |doc| {
            for (text, _) in markdown_links(&pattern, doc.body) {
                let anchor = text.trim().to_lowercase();
                if is_generic_anchor(&anchor) {
                    return Verdict::fail(format!("Link text \"{}\" is not descriptive", text.trim()))
                        .with_suggestion("Replace the anchor text with words describing the target");
                }
            }
            Verdict::pass("All link anchors are descriptive")
        },
    )
}

fn is_generic_anchor(anchor: &str) -> bool {
    vocab::GENERIC_ANCHOR_TEXTS.contains(&anchor)
        || anchor.starts_with("http://")
        || anchor.starts_with("https://")
        || anchor.starts_with("www.")
}

/// Level of an ATX heading line between H2 and H6, or `None`.
fn heading_level(line: &str) -> Option<usize> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if (2..=6).contains(&level) && line[level..].starts_with(' ') {
        Some(level)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
