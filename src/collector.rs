//! The top-level collector manifest.
//!
//! This is the document the collector is started with. It defines every
//! processor and exporter the generated pipelines refer to and pulls the
//! receiver and pipeline manifests in through `${file:...}` references, so the
//! two generated files can be swapped without touching it.

use serde_json::{Value, json};

use crate::document::Document;
use crate::generate::Generation;
use crate::pipelines::EXTENDED_EXPORT_PIPELINE;

/// Exporter fed by the extended export pipeline. Its settings are the
/// `f5_pipeline_default` block of the defaults.
pub const EXTENDED_EXPORTER: &str = "otlp/f5-datafabric";

/// Where the collector reads the two generated manifests from.
#[derive(Debug, Clone, PartialEq)]
pub struct IncludePaths {
    pub receivers: String,
    pub pipelines: String,
}

/// Processor definitions for every processor a pipeline can reference.
pub fn processors() -> Document {
    let value = json!({
        "batch/local": {},
        "batch/f5-datafabric": {"send_batch_max_size": 8192},
        "interval/f5-datafabric": {"interval": "300s"},
        "attributes/f5-datafabric": {
            "actions": [
                {"key": "dataType", "action": "upsert", "value": "x-agentic-ai-metric"}
            ]
        }
    });
    into_document(value)
}

/// Exporter definitions that are always present.
pub fn exporters() -> Document {
    let value = json!({
        "otlphttp/metrics-local": {"endpoint": "http://prometheus:9090/api/v1/otlp"},
        "debug/x-agentic-ai": {
            "verbosity": "basic",
            "sampling_initial": 5,
            "sampling_thereafter": 200
        }
    });
    into_document(value)
}

/// Build the collector manifest for a finished generation.
///
/// The extended exporter is defined only when its pipeline was emitted.
pub fn collector_manifest(generation: &Generation, includes: &IncludePaths) -> Document {
    let mut exporters = exporters();
    if generation.result.pipelines.contains(EXTENDED_EXPORT_PIPELINE) {
        let settings = generation
            .feature_settings
            .clone()
            .unwrap_or(Value::Object(Document::new()));
        exporters.insert(EXTENDED_EXPORTER.to_string(), settings);
    }

    let value = json!({
        "receivers": file_ref(&includes.receivers),
        "processors": processors(),
        "exporters": exporters,
        "service": {
            "telemetry": {
                "metrics": {
                    "readers": [
                        {"pull": {"exporter": {"prometheus": {"host": "0.0.0.0", "port": 8888}}}}
                    ]
                }
            },
            "pipelines": file_ref(&includes.pipelines)
        }
    });
    into_document(value)
}

fn file_ref(path: &str) -> String {
    format!("${{file:{path}}}")
}

fn into_document(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        _ => Document::new(),
    }
}
