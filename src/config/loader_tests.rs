use std::fs;

use tempfile::TempDir;

use super::*;
use crate::config::Config;
use crate::error::SeoGuardError;

#[test]
fn load_from_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "strict = true\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert!(config.strict);
}

#[test]
fn missing_explicit_path_is_a_file_read_error() {
    let dir = TempDir::new().unwrap();
    let result = load_from_path(&dir.path().join("missing.toml"));
    assert!(matches!(result, Err(SeoGuardError::FileRead { .. })));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "strict = maybe\n").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(SeoGuardError::TomlParse(_))));
}

#[test]
fn generated_template_parses_back() {
    let config: Config = toml::from_str(&default_toml()).unwrap();
    assert!(!config.strict);
    assert_eq!(config.scan.extensions, vec!["md", "mdx"]);
    assert!(!config.scan.exclude.is_empty());
}
