use indexmap::IndexMap;

use super::{Rule, Severity, frontmatter, quality, structure};

/// The fixed, ordered set of validation rules.
///
/// The registry is built once and never changes afterwards: rules are not
/// added, removed, or reordered during a run, so two lints of the same
/// document always produce the same result list in the same order.
#[derive(Debug)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
    index: IndexMap<&'static str, usize>,
}

impl RuleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            index: IndexMap::new(),
        }
    }

    fn register(&mut self, rule: Rule) {
        debug_assert!(
            !self.index.contains_key(rule.id),
            "duplicate rule id: {}",
            rule.id
        );
        self.index.insert(rule.id, self.rules.len());
        self.rules.push(rule);
    }

    /// All rules, in registration order.
    #[must_use]
    pub fn all(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.index.get(id).map(|&idx| &self.rules[idx])
    }

    /// Rules of the given severity, in registration order.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|rule| rule.severity == severity)
            .collect()
    }

    /// All rule ids, in registration order.
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.index.keys().copied().collect()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        // Front-matter completeness and format
        registry.register(frontmatter::title_length());
        registry.register(frontmatter::date_format());
        registry.register(frontmatter::category());
        registry.register(frontmatter::summary());
        registry.register(frontmatter::read_time());
        registry.register(frontmatter::filename_format());

        // Structure
        registry.register(structure::single_h1());
        registry.register(structure::heading_hierarchy());
        registry.register(structure::opening_keyword());
        registry.register(structure::internal_links());
        registry.register(structure::descriptive_link_text());

        // Media, placeholders, readability, integrity, density
        registry.register(quality::image_alt_text());
        registry.register(quality::no_placeholders());
        registry.register(quality::sentence_length());
        registry.register(quality::markdown_integrity());
        registry.register(quality::keyword_density());

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
