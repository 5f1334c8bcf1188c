use serde_json::Value;

use crate::document::Document;

/// Deep-merge `overlay` on top of `base`.
/// If both sides have a mapping for the same key, recurse.
/// Otherwise, `overlay`'s value wins. Keys keep their first-seen position.
pub fn deep_merge(mut base: Document, overlay: Document) -> Document {
    for (key, overlay_val) in overlay {
        let slot = base.entry(key).or_insert(Value::Null);
        *slot = match (std::mem::take(slot), overlay_val) {
            (Value::Object(base_map), Value::Object(overlay_map)) => {
                Value::Object(deep_merge(base_map, overlay_map))
            }
            (_, overlay_val) => overlay_val,
        };
    }
    base
}

/// Merge `overlay` onto a private copy of `base`.
///
/// `base` is left untouched, so the same template can seed any number of
/// merges without one result leaking into the next.
pub fn merge_onto(base: &Document, overlay: Document) -> Document {
    deep_merge(base.clone(), overlay)
}
