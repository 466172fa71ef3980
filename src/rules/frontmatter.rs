//! Front-matter completeness and format rules.

use std::path::Path;

use regex::Regex;

use super::vocab;
use super::{Document, Rule, Severity, Verdict};

const TITLE_MIN: usize = 45;
const TITLE_MAX: usize = 70;
const SUMMARY_MIN: usize = 120;
const SUMMARY_MAX: usize = 160;

pub fn title_length() -> Rule {
    Rule::new(
        "SEO-001",
        "title-length",
        "Title must be 45-70 characters with a primary keyword in its first half",
        Severity::Error,
        |doc| {
            let Some(title) = non_empty_text(doc, "title") else {
                return Verdict::fail("No title found in front matter")
                    .with_suggestion("Add a title field of 45-70 characters");
            };

            let length = title.chars().count();
            if !(TITLE_MIN..=TITLE_MAX).contains(&length) {
                return Verdict::fail(format!(
                    "Title is {length} characters (expected {TITLE_MIN}-{TITLE_MAX})"
                ))
                .with_suggestion("Rewrite the title to land between 45 and 70 characters");
            }

            let lower = title.to_lowercase();
            let half = length / 2;
            let keyword_in_first_half = vocab::PRIMARY_KEYWORDS.iter().any(|keyword| {
                lower
                    .find(keyword)
                    .is_some_and(|pos| lower[..pos].chars().count() < half)
            });
            if !keyword_in_first_half {
                return Verdict::fail("Title has no primary keyword in its first half")
                    .with_suggestion("Lead the title with a primary keyword");
            }

            Verdict::pass(format!("Title is {length} characters with an early keyword"))
        },
    )
}

pub fn date_format() -> Rule {
    let pattern = Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid regex");
    Rule::new(
        "SEO-002",
        "date-format",
        "Date must be present and formatted as YYYY-MM-DD",
        Severity::Error,
        move |doc| {
            let Some(date) = non_empty_text(doc, "date") else {
                return Verdict::fail("No date found in front matter")
                    .with_suggestion("Add a date field in YYYY-MM-DD format");
            };
            if !pattern.is_match(date) {
                return Verdict::fail(format!("Date \"{date}\" is not in YYYY-MM-DD format"))
                    .with_suggestion("Use the YYYY-MM-DD format, e.g. 2025-01-15");
            }
            Verdict::pass(format!("Date \"{date}\" is well-formed"))
        },
    )
}

pub fn category() -> Rule {
    Rule::new(
        "SEO-003",
        "category",
        "Category must be one of the recognized content categories",
        Severity::Error,
        |doc| {
            let Some(category) = non_empty_text(doc, "category") else {
                return Verdict::fail("No category found in front matter")
                    .with_suggestion(format!(
                        "Add a category field; one of: {}",
                        vocab::ALLOWED_CATEGORIES.join(", ")
                    ));
            };
            if !vocab::ALLOWED_CATEGORIES.contains(&category) {
                return Verdict::fail(format!("Category \"{category}\" is not recognized"))
                    .with_suggestion(format!(
                        "Use one of: {}",
                        vocab::ALLOWED_CATEGORIES.join(", ")
                    ));
            }
            Verdict::pass(format!("Category \"{category}\" is recognized"))
        },
    )
}

pub fn summary() -> Rule {
    Rule::new(
        "SEO-004",
        "summary",
        "Summary must be 120-160 characters and mention a recognized keyword",
        Severity::Error,
        |doc| {
            let Some(summary) = non_empty_text(doc, "summary") else {
                return Verdict::fail("No summary found in front matter")
                    .with_suggestion("Add a summary field of 120-160 characters");
            };

            let length = summary.chars().count();
            if !(SUMMARY_MIN..=SUMMARY_MAX).contains(&length) {
                return Verdict::fail(format!(
                    "Summary is {length} characters (expected {SUMMARY_MIN}-{SUMMARY_MAX})"
                ))
                .with_suggestion("Rewrite the summary to land between 120 and 160 characters");
            }

            if !vocab::contains_any_keyword(&summary.to_lowercase()) {
                return Verdict::fail("Summary mentions no recognized keyword")
                    .with_suggestion("Work a primary or secondary keyword into the summary");
            }

            Verdict::pass(format!("Summary is {length} characters with a keyword"))
        },
    )
}

pub fn read_time() -> Rule {
    let pattern = Regex::new(r"^\d+ min read$").expect("Invalid regex");
    Rule::new(
        "SEO-005",
        "read-time",
        "A read-time field must be present and match \"<N> min read\"",
        Severity::Warning,
        move |doc| {
            let value = doc
                .frontmatter
                .text("Readtime")
                .or_else(|| doc.frontmatter.text("readtime"))
                .map(str::trim)
                .filter(|v| !v.is_empty());
            let Some(read_time) = value else {
                return Verdict::fail("No read-time field found in front matter")
                    .with_suggestion("Add a Readtime field such as \"5 min read\"");
            };
            if !pattern.is_match(read_time) {
                return Verdict::fail(format!(
                    "Read time \"{read_time}\" does not match \"<N> min read\""
                ))
                .with_suggestion("Format the read time as \"5 min read\"");
            }
            Verdict::pass(format!("Read time \"{read_time}\" is well-formed"))
        },
    )
}

pub fn filename_format() -> Rule {
    let pattern =
        Regex::new(r"^(\d{4}-\d{2}-\d{2})-[a-z0-9]+(?:-[a-z0-9]+)*\.[A-Za-z]+$").expect("Invalid regex");
    Rule::new(
        "SEO-006",
        "filename-format",
        "Filename must match YYYY-MM-DD-slug.ext and agree with the front-matter date",
        Severity::Warning,
        move |doc| {
            let Some(filename) = doc.filename else {
                return Verdict::fail("No filename provided")
                    .with_suggestion("Supply the file path so the filename can be checked");
            };
            let name = Path::new(filename)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(filename);

            let Some(captures) = pattern.captures(name) else {
                return Verdict::fail(format!(
                    "Filename \"{name}\" does not match YYYY-MM-DD-slug.ext"
                ))
                .with_suggestion("Rename the file like 2025-01-15-my-post.md");
            };

            let file_date = &captures[1];
            if let Some(date) = doc.frontmatter.text("date")
                && date != file_date
            {
                return Verdict::fail(format!(
                    "Filename date {file_date} does not match front-matter date {date}"
                ))
                .with_suggestion("Align the filename date with the date field");
            }

            Verdict::pass(format!("Filename \"{name}\" is well-formed"))
        },
    )
}

/// Trimmed, non-empty scalar for `key`, or `None`.
fn non_empty_text<'a>(doc: &Document<'a>, key: &str) -> Option<&'a str> {
    doc.frontmatter
        .text(key)
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "frontmatter_tests.rs"]
mod tests;
