use super::*;

#[test]
fn vocabularies_are_lowercase() {
    for word in PRIMARY_KEYWORDS
        .iter()
        .chain(SECONDARY_KEYWORDS)
        .chain(ALLOWED_CATEGORIES)
        .chain(GENERIC_ANCHOR_TEXTS)
    {
        assert_eq!(*word, word.to_lowercase(), "{word} should be lowercase");
    }
}

#[test]
fn finds_primary_keyword_in_lowered_text() {
    assert_eq!(
        find_primary_keyword("shipping gtm as code in practice"),
        Some("gtm as code")
    );
    assert_eq!(find_primary_keyword("no keywords in sight"), None);
}

#[test]
fn any_keyword_covers_both_lists() {
    assert!(contains_any_keyword("a note on revenue automation"));
    assert!(contains_any_keyword("a note on lead scoring"));
    assert!(!contains_any_keyword("a note on birdwatching"));
}
