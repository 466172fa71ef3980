use serde::{Deserialize, Serialize};

/// Tool configuration from `.seo-guard.toml`.
///
/// Configuration covers plumbing only — what to scan and how to report.
/// The rule set and its vocabularies are compile-time constants and cannot
/// be configured.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Strict mode: exit non-zero when an error-severity rule failed.
    #[serde(default)]
    pub strict: bool,

    /// Default output format (text, json, markdown).
    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// File extensions to lint.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Exclude patterns (glob syntax).
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "mdx".to_string()]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
