//! Content-quality rules: media, placeholders, readability, markdown
//! integrity, and keyword density.

use regex::Regex;

use super::vocab;
use super::{Rule, Severity, Verdict};

const MAX_SENTENCE_WORDS: usize = 30;
const MAX_KEYWORD_DENSITY: f64 = 2.5;
const MIN_COUNTED_WORD_LEN: usize = 3;

pub fn image_alt_text() -> Rule {
    let pattern = Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").expect("Invalid regex");
    Rule::new(
        "SEO-012",
        "image-alt-text",
        "Every image must carry non-empty alt text",
        Severity::Error,
        move |doc| {
            let mut images = 0usize;
            let mut missing = 0usize;
            for captures in pattern.captures_iter(doc.body) {
                images += 1;
                let alt = captures.get(1).map_or("", |m| m.as_str());
                if alt.trim().is_empty() {
                    missing += 1;
                }
            }
            if images == 0 {
                return Verdict::pass("No images to check");
            }
            if missing > 0 {
                return Verdict::fail(format!("{missing} of {images} image(s) missing alt text"))
                    .with_suggestion("Describe each image in its alt text");
            }
            Verdict::pass(format!("All {images} image(s) have alt text"))
        },
    )
}

pub fn no_placeholders() -> Rule {
    let word_marker = Regex::new(r"(?i)\b(todo|tbd|fixme)\b").expect("Invalid regex");
    Rule::new(
        "SEO-013",
        "no-placeholders",
        "Placeholder markers must not survive into published content",
        Severity::Error,
        move |doc| {
            let mut found: Vec<String> = Vec::new();
            let lower = doc.body.to_lowercase();

            if doc.body.contains("](#)") {
                found.push("empty anchor link \"](#)\"".to_string());
            }
            if doc.body.contains("](/todo") {
                found.push("\"/todo\" link target".to_string());
            }
            if lower.contains("example.com") {
                found.push("literal \"example.com\"".to_string());
            }
            if lower.contains("lorem ipsum") {
                found.push("\"lorem ipsum\" filler".to_string());
            }

            for marker in word_markers(&word_marker, doc.body) {
                found.push(marker);
            }

            if found.is_empty() {
                return Verdict::pass("No placeholder markers found");
            }
            Verdict::fail(format!("Found placeholder markers: {}", found.join(", ")))
                .with_suggestion("Replace placeholders with final content before publishing")
        },
    )
}

/// Standalone "tbd"/"fixme" markers, plus "todo" unless a colon follows it
/// ("Todo: ship the launch page" is a legitimate heading).
fn word_markers(pattern: &Regex, body: &str) -> Vec<String> {
    let mut markers = Vec::new();
    let mut seen_todo = false;
    let mut seen_tbd = false;
    let mut seen_fixme = false;
    for found in pattern.find_iter(body) {
        match found.as_str().to_lowercase().as_str() {
            "todo" => {
                let followed_by_colon = body.as_bytes().get(found.end()) == Some(&b':');
                if !followed_by_colon && !seen_todo {
                    markers.push("\"todo\" without a colon".to_string());
                    seen_todo = true;
                }
            }
            "tbd" if !seen_tbd => {
                markers.push("standalone \"tbd\"".to_string());
                seen_tbd = true;
            }
            "fixme" if !seen_fixme => {
                markers.push("standalone \"fixme\"".to_string());
                seen_fixme = true;
            }
            _ => {}
        }
    }
    markers
}

pub fn sentence_length() -> Rule {
    Rule::new(
        "SEO-014",
        "sentence-length",
        "Sentences in the opening two paragraphs must stay under 31 words",
        Severity::Info,
        |doc| {
            let paragraphs = doc
                .body
                .split("\n\n")
                .filter(|paragraph| !paragraph.trim().is_empty())
                .take(2);
            for paragraph in paragraphs {
                for sentence in paragraph.split(['.', '!', '?']) {
                    let words = sentence.split_whitespace().count();
                    if words > MAX_SENTENCE_WORDS {
                        return Verdict::fail(format!(
                            "A sentence in the opening paragraphs runs {words} words (max {MAX_SENTENCE_WORDS})"
                        ))
                        .with_suggestion("Split long opening sentences in two");
                    }
                }
            }
            Verdict::pass("Opening sentences are readable")
        },
    )
}

pub fn markdown_integrity() -> Rule {
    let deep_heading = Regex::new(r"(?m)^#{7,}").expect("Invalid regex");
    Rule::new(
        "SEO-015",
        "markdown-integrity",
        "Markdown syntax must be well-formed",
        Severity::Error,
        move |doc| {
            let mut problems: Vec<&str> = Vec::new();
            if doc.body.contains("[\n") || doc.body.contains("](\n") {
                problems.push("unclosed link syntax");
            }
            if doc.body.matches("```").count() % 2 != 0 {
                problems.push("unbalanced code fence");
            }
            if deep_heading.is_match(doc.body) {
                problems.push("heading deeper than H6");
            }
            if problems.is_empty() {
                return Verdict::pass("Markdown syntax looks well-formed");
            }
            Verdict::fail(format!("Markdown issues: {}", problems.join(", ")))
                .with_suggestion("Fix the broken markdown before publishing")
        },
    )
}

pub fn keyword_density() -> Rule {
    Rule::new(
        "SEO-016",
        "keyword-density",
        "No single primary keyword may exceed 2.5% of body words",
        Severity::Warning,
        |doc| {
            let total_words = doc
                .body
                .split_whitespace()
                .filter(|word| word.chars().count() >= MIN_COUNTED_WORD_LEN)
                .count();
            if total_words == 0 {
                return Verdict::pass("No body text to measure");
            }

            let lower = doc.body.to_lowercase();
            for keyword in vocab::PRIMARY_KEYWORDS {
                let occurrences = lower.matches(keyword).count();
                #[allow(clippy::cast_precision_loss)]
                let density = occurrences as f64 / total_words as f64 * 100.0;
                if density > MAX_KEYWORD_DENSITY {
                    return Verdict::fail(format!(
                        "Keyword \"{keyword}\" appears {occurrences} times ({density:.1}% of {total_words} words, max {MAX_KEYWORD_DENSITY}%)"
                    ))
                    .with_suggestion("Vary the phrasing; keyword stuffing hurts ranking");
                }
            }
            Verdict::pass("Keyword density is within bounds")
        },
    )
}

#[cfg(test)]
#[path = "quality_tests.rs"]
mod tests;
