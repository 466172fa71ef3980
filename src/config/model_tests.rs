use super::*;

#[test]
fn default_config_values() {
    let config = Config::default();
    assert!(!config.strict);
    assert!(config.format.is_none());
    assert_eq!(config.scan.extensions, vec!["md", "mdx"]);
    assert!(config.scan.exclude.is_empty());
}

#[test]
fn parse_full_config() {
    let toml = r#"
strict = true
format = "json"

[scan]
extensions = ["md"]
exclude = ["**/drafts/**"]
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert!(config.strict);
    assert_eq!(config.format.as_deref(), Some("json"));
    assert_eq!(config.scan.extensions, vec!["md"]);
    assert_eq!(config.scan.exclude, vec!["**/drafts/**"]);
}

#[test]
fn partial_config_fills_defaults() {
    let config: Config = toml::from_str("strict = true\n").unwrap();
    assert!(config.strict);
    assert_eq!(config.scan.extensions, vec!["md", "mdx"]);
}

#[test]
fn empty_config_is_valid() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}
