mod frontmatter;
mod quality;
mod registry;
mod structure;
pub mod vocab;

pub use registry::RuleRegistry;

use serde::Serialize;

use crate::frontmatter::FrontMatter;

/// Severity of a rule. Fixed per rule; it never changes per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        };
        f.write_str(s)
    }
}

/// Outcome of running one rule against one document.
///
/// `message` is always populated, including for passing verdicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    pub message: String,
    pub suggestion: Option<String>,
    pub line: Option<usize>,
}

impl Verdict {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            suggestion: None,
            line: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            suggestion: None,
            line: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub const fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// One document as the rules see it: the raw text, its parsed front matter,
/// the body with the front-matter block stripped, and an optional filename.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    pub content: &'a str,
    pub frontmatter: &'a FrontMatter,
    pub body: &'a str,
    pub filename: Option<&'a str>,
    /// Number of file lines preceding the body (0 without front matter).
    pub body_start_line: usize,
}

type CheckFn = Box<dyn Fn(&Document<'_>) -> Verdict + Send + Sync>;

/// A single validation rule: identity, metadata, and a pure check function.
///
/// Checks must be deterministic and free of side effects; they see only the
/// [`Document`] handed to them.
pub struct Rule {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    check: CheckFn,
}

impl Rule {
    pub(crate) fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        severity: Severity,
        check: impl Fn(&Document<'_>) -> Verdict + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            name,
            description,
            severity,
            check: Box::new(check),
        }
    }

    #[must_use]
    pub fn check(&self, document: &Document<'_>) -> Verdict {
        (self.check)(document)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("severity", &self.severity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
