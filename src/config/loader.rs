use std::path::Path;

use crate::error::{Result, SeoGuardError};

use super::Config;

pub const CONFIG_FILE_NAME: &str = ".seo-guard.toml";

/// Load `.seo-guard.toml` from the working directory, falling back to
/// defaults when no file exists.
///
/// # Errors
/// Returns an error if a present file cannot be read or parsed.
pub fn load_default() -> Result<Config> {
    let path = Path::new(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(Config::default());
    }
    load_from_path(path)
}

/// Load configuration from an explicit path.
///
/// # Errors
/// Returns an error if the file is missing, unreadable, or not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| SeoGuardError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Template written by `seo-guard init`.
#[must_use]
pub fn default_toml() -> String {
    r#"# seo-guard configuration file

# Strict mode: exit non-zero when an error-severity rule failed (default: false)
strict = false

# Default output format: text, json, or markdown
# format = "text"

[scan]
# File extensions to lint
extensions = ["md", "mdx"]

# Exclude patterns (glob syntax)
exclude = [
    "**/node_modules/**",
    "**/.git/**",
    "**/drafts/**",
]
"#
    .to_string()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
