//! Fixed vocabularies shared by the rule set. These are compile-time
//! constants, not configuration: reports stay comparable across runs and the
//! thresholds in the rule descriptions stay truthful.

/// Primary keywords. All lowercase; matching is case-insensitive.
pub const PRIMARY_KEYWORDS: &[&str] = &[
    "gtm as code",
    "go-to-market engineering",
    "revenue automation",
    "pipeline analytics",
    "growth infrastructure",
];

/// Secondary keywords, recognized by the summary rule alongside the primary
/// list.
pub const SECONDARY_KEYWORDS: &[&str] = &[
    "attribution",
    "lead scoring",
    "crm integration",
    "sales funnel",
    "workflow automation",
];

/// Allowed values for the `category` front-matter field.
pub const ALLOWED_CATEGORIES: &[&str] = &["gtm", "engineering", "analytics", "automation", "strategy"];

/// Anchor texts that say nothing about their target.
pub const GENERIC_ANCHOR_TEXTS: &[&str] = &["click here", "here", "link", "read more"];

/// First primary keyword found in `text_lower` (already lowercased).
#[must_use]
pub fn find_primary_keyword(text_lower: &str) -> Option<&'static str> {
    PRIMARY_KEYWORDS
        .iter()
        .find(|keyword| text_lower.contains(*keyword))
        .copied()
}

/// Whether `text_lower` mentions any primary or secondary keyword.
#[must_use]
pub fn contains_any_keyword(text_lower: &str) -> bool {
    find_primary_keyword(text_lower).is_some()
        || SECONDARY_KEYWORDS
            .iter()
            .any(|keyword| text_lower.contains(keyword))
}

#[cfg(test)]
#[path = "vocab_tests.rs"]
mod tests;
