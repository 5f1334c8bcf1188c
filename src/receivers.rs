//! Receiver assembly: shared defaults, per-instance overrides and the
//! external receiver feed combined into one ordered receiver map.
//!
//! Every instance entry is merged onto its own copy of the shared defaults
//! after the reserved `pipeline` selector is stripped. External receivers are
//! inserted verbatim and win any name collision. The resulting order is all
//! instance-derived receivers in input order, then all external receivers in
//! input order.

use serde_json::Value;

use crate::document::{self, Document};
use crate::error::{GenError, InputRole};
use crate::merge::merge_onto;
use crate::types::Notice;

/// Key in the defaults document holding the shared receiver defaults.
pub const RECEIVER_DEFAULTS_KEY: &str = "bigip_receiver_defaults";

/// Reserved per-instance field naming a pipeline grouping. Never emitted.
pub const PIPELINE_SELECTOR_KEY: &str = "pipeline";

/// Key in the external document holding the receiver mapping.
pub const EXTERNAL_RECEIVERS_KEY: &str = "receivers";

/// Final receiver name to fully merged receiver document.
pub type ReceiverMap = Document;

/// Output of [`assemble_receivers`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiverAssembly {
    pub receivers: ReceiverMap,
    pub notices: Vec<Notice>,
}

/// Build the merged receiver map.
///
/// `defaults`, `instances` and `external` are the root mappings of the three
/// inputs. None of them is modified.
pub fn assemble_receivers(
    defaults: &Document,
    instances: &Document,
    external: &Document,
) -> Result<ReceiverAssembly, GenError> {
    let shared = document::section(defaults, RECEIVER_DEFAULTS_KEY, InputRole::Defaults)?;
    let external = document::section(external, EXTERNAL_RECEIVERS_KEY, InputRole::External)?;

    let mut receivers = ReceiverMap::new();
    let mut notices = Vec::new();

    for (name, entry) in instances {
        let overrides = instance_overrides(name, entry)?;
        if external.contains_key(name) {
            tracing::warn!(
                receiver = %name,
                "external receiver replaces the instance receiver of the same name"
            );
            notices.push(Notice::ReceiverNameCollision { name: name.clone() });
            continue;
        }
        receivers.insert(name.clone(), Value::Object(merge_onto(&shared, overrides)));
    }

    for (name, entry) in external {
        receivers.insert(name, entry);
    }

    Ok(ReceiverAssembly { receivers, notices })
}

/// Clean one instance entry into an override mapping.
///
/// A null entry (a bare `name:` line in YAML) overrides nothing.
fn instance_overrides(name: &str, entry: &Value) -> Result<Document, GenError> {
    let mut overrides = match entry {
        Value::Null => Document::new(),
        Value::Object(map) => map.clone(),
        other => {
            return Err(GenError::MalformedInput {
                role: InputRole::Instances,
                reason: format!(
                    "instance '{name}' must be a mapping, found {}",
                    document::kind(other)
                ),
            });
        }
    };
    if let Some(selector) = overrides.shift_remove(PIPELINE_SELECTOR_KEY) {
        tracing::debug!(instance = %name, %selector, "dropping pipeline selector");
    }
    Ok(overrides)
}
