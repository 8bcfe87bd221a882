//! manifest::schema
//!
//! Shape checks over a parsed YAML tree.
//!
//! # Design
//!
//! Documents are parsed into [`serde_yaml::Value`] first and then walked by
//! hand, so that every failure can name the exact field that broke. Fields
//! not mentioned by a schema are ignored.

use std::fmt;

use serde_yaml::{Mapping, Value};

/// Location of a field inside a document, e.g. `repositories.ros2/rclcpp.url`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// The document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// This path extended by one segment.
    pub fn join(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// Whether this is the document root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0.join("."))
        }
    }
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Where in the document
    pub path: FieldPath,
    /// What was wrong
    pub message: String,
}

impl Violation {
    fn new(path: &FieldPath, message: impl Into<String>) -> Self {
        Self {
            path: path.clone(),
            message: message.into(),
        }
    }

    fn expected(path: &FieldPath, expected: &str, found: &Value) -> Self {
        Self::new(
            path,
            format!("expected {}, found {}", expected, kind_of(found)),
        )
    }
}

/// Human name of a YAML value's type.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Require a mapping.
pub fn mapping<'a>(value: &'a Value, path: &FieldPath) -> Result<&'a Mapping, Violation> {
    value
        .as_mapping()
        .ok_or_else(|| Violation::expected(path, "mapping", value))
}

/// Require a string.
pub fn string<'a>(value: &'a Value, path: &FieldPath) -> Result<&'a str, Violation> {
    value
        .as_str()
        .ok_or_else(|| Violation::expected(path, "string", value))
}

/// Look up a required field of a mapping.
pub fn required<'a>(
    map: &'a Mapping,
    key: &str,
    path: &FieldPath,
) -> Result<(&'a Value, FieldPath), Violation> {
    let field = path.join(key);
    match map.get(key) {
        Some(value) => Ok((value, field)),
        None => Err(Violation::new(&field, "required field is missing")),
    }
}

/// Look up an optional field of a mapping.
///
/// An absent key is `None`; a key present with any value, `null` included,
/// is returned for the caller to check.
pub fn optional<'a>(
    map: &'a Mapping,
    key: &str,
    path: &FieldPath,
) -> Option<(&'a Value, FieldPath)> {
    map.get(key).map(|value| (value, path.join(key)))
}

/// Iterate the entries of a mapping by key name.
///
/// Scalar keys other than strings (`123`, `true`, `~`) are read by their
/// plain YAML spelling. Sequence and mapping keys are violations.
pub fn entries<'a>(
    map: &'a Mapping,
    path: &'a FieldPath,
) -> impl Iterator<Item = Result<(String, &'a Value, FieldPath), Violation>> + 'a {
    map.iter().map(move |(key, value)| {
        let name = key_name(key).ok_or_else(|| {
            Violation::new(path, format!("expected scalar key, found {}", kind_of(key)))
        })?;
        let field = path.join(name.as_str());
        Ok((name, value, field))
    })
}

fn key_name(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}
