mod report;
mod result;

pub use report::ReportOptions;
pub use result::{LintReport, LintResult, LintSummary, score};

use crate::frontmatter::{self, FrontMatter};
use crate::rules::{Document, RuleRegistry};

/// Applies every registered rule to one document at a time.
///
/// Stateless per call: the same `(content, frontmatter, filename)` triple
/// always yields the same result list.
pub struct Linter {
    registry: RuleRegistry,
}

impl Linter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::default(),
        }
    }

    #[must_use]
    pub const fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Lint one document, producing one [`LintResult`] per registered rule
    /// in registry order.
    ///
    /// When `frontmatter` is `None`, a leading `---`-delimited YAML block is
    /// parsed from `content`; a malformed block degrades to an empty map
    /// rather than aborting the lint.
    #[must_use]
    pub fn lint(
        &self,
        content: &str,
        frontmatter: Option<FrontMatter>,
        filename: Option<&str>,
    ) -> Vec<LintResult> {
        let split = frontmatter::split(content);
        let frontmatter = frontmatter.unwrap_or_else(|| {
            split
                .raw_frontmatter
                .map(|raw| frontmatter::parse_block(raw).unwrap_or_default())
                .unwrap_or_default()
        });

        let document = Document {
            content,
            frontmatter: &frontmatter,
            body: split.body,
            filename,
            body_start_line: split.body_start_line,
        };

        self.registry
            .all()
            .iter()
            .map(|rule| LintResult::from_verdict(rule, rule.check(&document)))
            .collect()
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
