//! Generation pipeline: the three input documents in, the receiver and
//! pipeline manifests out.
//!
//! Operates on pre-loaded documents (`GenerationInputs`) with no I/O, so the
//! whole run is testable with synthetic inputs. Steps:
//!
//! 1. Require all three inputs (fail fast, no partial output)
//! 2. Check each root is a mapping
//! 3. Assemble receivers from defaults, instance overrides and external feed
//! 4. Assemble pipelines from the receiver names and the defaults' feature flag
//!
//! Dry runs are the caller's business: the result is the same either way and
//! only the persistence step is skipped.

use serde::Serialize;
use serde_json::{Value, json};

use crate::document::{self, Document};
use crate::error::{GenError, InputRole};
use crate::pipelines::{self, FEATURE_SETTINGS_KEY, PipelineSet};
use crate::receivers::{self, ReceiverMap};
use crate::types::Notice;

/// The three loaded input documents. `None` means the loader came back empty.
#[derive(Debug, Clone, Default)]
pub struct GenerationInputs {
    pub defaults: Option<Value>,
    pub instances: Option<Value>,
    pub external: Option<Value>,
}

/// The receivers and pipelines a run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub receivers: ReceiverMap,
    pub pipelines: PipelineSet,
}

impl GenerationResult {
    /// `{receivers: ...}`
    pub fn receiver_manifest(&self) -> Document {
        let mut manifest = Document::new();
        manifest.insert(
            "receivers".to_string(),
            Value::Object(self.receivers.clone()),
        );
        manifest
    }

    /// `{service: {pipelines: ...}}`
    pub fn pipeline_manifest(&self) -> Document {
        let pipelines = Value::Object(self.pipelines.to_document());
        let mut manifest = Document::new();
        manifest.insert("service".to_string(), json!({ "pipelines": pipelines }));
        manifest
    }
}

/// A finished run: the result plus everything worth reporting about it.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub result: GenerationResult,
    pub notices: Vec<Notice>,
    /// The defaults' extended export settings block, when present.
    pub feature_settings: Option<Value>,
}

/// Run the generation over pre-loaded inputs.
pub fn generate(inputs: GenerationInputs) -> Result<Generation, GenError> {
    let defaults = require(inputs.defaults.as_ref(), InputRole::Defaults)?;
    let instances = require(inputs.instances.as_ref(), InputRole::Instances)?;
    let external = require(inputs.external.as_ref(), InputRole::External)?;

    tracing::info!("Generating receiver configs...");
    let receiver_assembly = receivers::assemble_receivers(defaults, instances, external)?;

    tracing::info!("Generating pipeline configs...");
    let pipeline_assembly = pipelines::assemble_pipelines(
        receiver_assembly.receivers.keys().map(String::as_str),
        defaults,
    );

    let mut notices = receiver_assembly.notices;
    notices.extend(pipeline_assembly.notices);

    Ok(Generation {
        result: GenerationResult {
            receivers: receiver_assembly.receivers,
            pipelines: pipeline_assembly.pipelines,
        },
        notices,
        feature_settings: defaults.get(FEATURE_SETTINGS_KEY).cloned(),
    })
}

/// An input must be present, a mapping, and not empty.
fn require(value: Option<&Value>, role: InputRole) -> Result<&Document, GenError> {
    let value = match value {
        None | Some(Value::Null) => {
            return Err(GenError::InputUnavailable {
                role,
                reason: "no document was loaded".into(),
            });
        }
        Some(v) => v,
    };
    let doc = document::root_mapping(value, role)?;
    if doc.is_empty() {
        return Err(GenError::InputUnavailable {
            role,
            reason: "the document is empty".into(),
        });
    }
    Ok(doc)
}
