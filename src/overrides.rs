//! Convert dotted-key CLI overrides into a nested settings layer.
//!
//! Each `("inputs.defaults", Value)` pair is expanded into the nested mapping
//! needed for deep-merge with the other settings layers.

use std::collections::HashSet;

use confique::meta::{FieldKind, Meta};
use serde_json::Value;

use crate::document::Document;

/// Convert dotted-key overrides into a nested mapping.
///
/// `("inputs.defaults", "/d.yaml")` becomes `{inputs: {defaults: "/d.yaml"}}`
///
/// If multiple entries target the same key, the last one wins. An entry whose
/// path runs through a non-mapping value replaces that value with a mapping.
pub fn overrides_to_document(entries: &[(String, Value)]) -> Document {
    let mut doc = Document::new();
    for (dotted_key, value) in entries {
        set_nested(&mut doc, dotted_key, value.clone());
    }
    doc
}

fn set_nested(doc: &mut Document, dotted_key: &str, value: Value) {
    let segments: Vec<&str> = dotted_key.split('.').collect();
    let Some((leaf, path)) = segments.split_last() else {
        return;
    };
    let mut current = doc;

    for segment in path {
        let slot = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Document::new()));
        if !slot.is_object() {
            *slot = Value::Object(Document::new());
        }
        let Value::Object(next) = slot else {
            return;
        };
        current = next;
    }

    current.insert(leaf.to_string(), value);
}

/// Collect all valid leaf key paths from a confique `Meta` tree.
///
/// Returns dotted paths like `"inputs.defaults"` or `"outputs.collector"`.
/// Section names (nested structs) are excluded; only leaf fields are returned.
pub fn valid_keys(meta: &Meta) -> HashSet<String> {
    let mut keys = HashSet::new();
    collect_keys(meta, "", &mut keys);
    keys
}

fn collect_keys(meta: &Meta, prefix: &str, keys: &mut HashSet<String>) {
    for field in meta.fields {
        let dotted = if prefix.is_empty() {
            field.name.to_string()
        } else {
            format!("{prefix}.{}", field.name)
        };
        match &field.kind {
            FieldKind::Leaf { .. } => {
                keys.insert(dotted);
            }
            FieldKind::Nested { meta, .. } => {
                collect_keys(meta, &dotted, keys);
            }
        }
    }
}
