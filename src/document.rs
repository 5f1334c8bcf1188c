//! The structured document type every input and output is expressed in.
//!
//! Documents are `serde_json::Value` trees built with the `preserve_order`
//! feature: mappings are string-keyed, keys are unique, and iteration follows
//! insertion order, so the manifests come out in the order they were built.
//! YAML in, YAML out goes through `serde_yaml` without an intermediate format.

use serde_json::Value;

use crate::error::{GenError, InputRole};

/// A string-keyed, insertion-ordered mapping.
pub type Document = serde_json::Map<String, Value>;

/// Borrow the root of an input as a mapping.
///
/// A root that is anything other than a mapping is a shape error for the whole
/// input and is surfaced rather than coerced.
pub fn root_mapping(value: &Value, role: InputRole) -> Result<&Document, GenError> {
    value.as_object().ok_or_else(|| GenError::MalformedInput {
        role,
        reason: format!("expected a mapping at the top level, found {}", kind(value)),
    })
}

/// Read a recognized sub-section of `doc` as a mapping.
///
/// Absent and null sections read as an empty mapping. A section holding any
/// other kind of value is a shape error.
pub fn section(doc: &Document, key: &str, role: InputRole) -> Result<Document, GenError> {
    match doc.get(key) {
        None | Some(Value::Null) => Ok(Document::new()),
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(other) => Err(GenError::MalformedInput {
            role,
            reason: format!("'{key}' must be a mapping, found {}", kind(other)),
        }),
    }
}

/// A feature flag is on only when it is literally `true`.
pub fn is_enabled(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(true)))
}

/// Whether a value carries any content.
///
/// Null, `false`, zero, and empty strings, sequences and mappings are empty.
pub fn is_non_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(m)) => !m.is_empty(),
    }
}

/// Short human name for the kind of a value, used in error messages.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
