use std::collections::BTreeMap;

use thiserror::Error;

/// A single front-matter value.
///
/// Scalars are carried as their literal text (dates stay `"2025-01-15"`,
/// numbers stay `"5"`), since every rule consumes them as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            Self::Text(_) => None,
        }
    }
}

/// Parsed front matter: a key→value map with case-sensitive keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: BTreeMap<String, FieldValue>,
}

impl FrontMatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Text value for `key`, or `None` when absent or not a scalar.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(FieldValue::as_text)
    }

    /// List value for `key`, or `None` when absent or not a list.
    #[must_use]
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.fields.get(key).and_then(FieldValue::as_list)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.fields.insert(key.into(), value);
    }
}

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("front matter is not a key-value mapping")]
    NotAMapping,
}

/// Raw pieces of a document: the front-matter block (if any) and the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitContent<'a> {
    /// Text between the `---` delimiters, excluding the delimiters themselves.
    pub raw_frontmatter: Option<&'a str>,
    /// Everything after the closing `---` line, or the whole input when no
    /// front-matter block is present.
    pub body: &'a str,
    /// Number of lines consumed by the front-matter block, so rule verdicts
    /// can report line numbers relative to the file on disk.
    pub body_start_line: usize,
}

/// Split a document into its leading `---`-delimited front-matter block and
/// body. An unterminated block is treated as body text.
#[must_use]
pub fn split(content: &str) -> SplitContent<'_> {
    let no_block = SplitContent {
        raw_frontmatter: None,
        body: content,
        body_start_line: 0,
    };

    let Some(first_end) = content.find('\n') else {
        return no_block;
    };
    if content[..first_end].trim_end_matches('\r') != "---" {
        return no_block;
    }

    let mut pos = first_end + 1;
    let mut line_count = 1;
    while pos <= content.len() {
        let line_end = content[pos..].find('\n').map_or(content.len(), |i| pos + i);
        let line = &content[pos..line_end];
        line_count += 1;
        if line.trim_end_matches('\r').trim() == "---" {
            let body_start = if line_end < content.len() {
                line_end + 1
            } else {
                content.len()
            };
            return SplitContent {
                raw_frontmatter: Some(&content[first_end + 1..pos]),
                body: &content[body_start..],
                body_start_line: line_count,
            };
        }
        pos = line_end + 1;
    }

    no_block
}

/// Parse a raw front-matter block (the text between the `---` delimiters).
///
/// # Errors
/// Returns an error when the block is not valid YAML or not a mapping.
/// Callers that must never fail map the error branch to an empty map.
pub fn parse_block(raw: &str) -> std::result::Result<FrontMatter, FrontMatterError> {
    if raw.trim().is_empty() {
        return Ok(FrontMatter::new());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(raw)?;
    let serde_yaml::Value::Mapping(mapping) = value else {
        return Err(FrontMatterError::NotAMapping);
    };

    let mut frontmatter = FrontMatter::new();
    for (key, value) in mapping {
        let serde_yaml::Value::String(key) = key else {
            continue;
        };
        if let Some(converted) = convert_value(value) {
            frontmatter.insert(key, converted);
        }
    }
    Ok(frontmatter)
}

/// Extract and parse the front matter of a whole document.
///
/// # Errors
/// Returns an error when a front-matter block is present but malformed.
/// A document without a block yields an empty map.
pub fn parse(content: &str) -> std::result::Result<FrontMatter, FrontMatterError> {
    split(content)
        .raw_frontmatter
        .map_or_else(|| Ok(FrontMatter::new()), parse_block)
}

fn convert_value(value: serde_yaml::Value) -> Option<FieldValue> {
    match value {
        serde_yaml::Value::String(s) => Some(FieldValue::Text(s)),
        serde_yaml::Value::Number(n) => Some(FieldValue::Text(n.to_string())),
        serde_yaml::Value::Bool(b) => Some(FieldValue::Text(b.to_string())),
        serde_yaml::Value::Null => Some(FieldValue::Text(String::new())),
        serde_yaml::Value::Sequence(items) => Some(FieldValue::List(
            items
                .into_iter()
                .filter_map(|item| match item {
                    serde_yaml::Value::String(s) => Some(s),
                    serde_yaml::Value::Number(n) => Some(n.to_string()),
                    serde_yaml::Value::Bool(b) => Some(b.to_string()),
                    _ => None,
                })
                .collect(),
        )),
        serde_yaml::Value::Mapping(_) | serde_yaml::Value::Tagged(_) => None,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
