use serde_json::Value;

use crate::document::Document;

/// Build a settings layer from environment variables matching `{PREFIX}__*`.
///
/// Double underscore `__` separates nesting levels.
/// Single `_` within a segment is literal (part of the field name).
/// Segments are lowercased to match Rust field names.
///
/// Every setting is a path or a path-like string, so values are kept as
/// strings; a directory named `8080` stays a string.
///
/// Takes an iterator so tests can pass synthetic data instead of `std::env::vars()`.
pub fn env_to_document(prefix: &str, vars: impl IntoIterator<Item = (String, String)>) -> Document {
    let needle = format!("{prefix}__");
    let mut doc = Document::new();

    for (key, value) in vars {
        let Some(rest) = key.strip_prefix(&needle) else {
            continue;
        };
        if rest.is_empty() {
            continue;
        }

        let segments: Vec<&str> = rest.split("__").collect();
        insert_nested(&mut doc, &segments, Value::String(value));
    }

    doc
}

fn insert_nested(doc: &mut Document, segments: &[&str], value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };
    let key = first.to_lowercase();

    if rest.is_empty() {
        doc.insert(key, value);
    } else {
        let sub = doc
            .entry(key)
            .or_insert_with(|| Value::Object(Document::new()));
        if let Value::Object(sub_doc) = sub {
            insert_nested(sub_doc, rest, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn nested_key() {
        let doc = env_to_document(
            "OTELCOL_GEN",
            vars(&[("OTELCOL_GEN__INPUTS__DEFAULTS", "/etc/defaults.yaml")]),
        );
        assert_eq!(doc["inputs"]["defaults"], "/etc/defaults.yaml");
    }

    #[test]
    fn single_underscore_preserved() {
        let doc = env_to_document(
            "OTELCOL_GEN",
            vars(&[("OTELCOL_GEN__OUTPUTS__RECEIVERS_INCLUDE", "/x.yaml")]),
        );
        assert_eq!(doc["outputs"]["receivers_include"], "/x.yaml");
    }

    #[test]
    fn numeric_looking_values_stay_strings() {
        let doc = env_to_document("APP", vars(&[("APP__OUTPUTS__COLLECTOR", "8080")]));
        assert_eq!(doc["outputs"]["collector"], "8080");
    }

    #[test]
    fn no_matching_prefix_ignored() {
        let doc = env_to_document("OTELCOL_GEN", vars(&[("OTHER__INPUTS__DEFAULTS", "x")]));
        assert!(doc.is_empty());
    }

    #[test]
    fn bare_prefix_ignored() {
        let doc = env_to_document("OTELCOL_GEN", vars(&[("OTELCOL_GEN", "x")]));
        assert!(doc.is_empty());
    }

    #[test]
    fn prefix_with_single_underscore_not_matched() {
        let doc = env_to_document("APP", vars(&[("APP_INPUTS", "x")]));
        assert!(doc.is_empty());
    }

    #[test]
    fn multiple_vars_combined() {
        let doc = env_to_document(
            "APP",
            vars(&[
                ("APP__INPUTS__DEFAULTS", "/d.yaml"),
                ("APP__INPUTS__EXTERNAL", "/s.yaml"),
                ("APP__OUTPUTS__PIPELINES", "/p.yml"),
            ]),
        );
        assert_eq!(doc["inputs"]["defaults"], "/d.yaml");
        assert_eq!(doc["inputs"]["external"], "/s.yaml");
        assert_eq!(doc["outputs"]["pipelines"], "/p.yml");
    }
}
