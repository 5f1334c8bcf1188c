//! Pipeline assembly from the merged receiver names.
//!
//! Each receiver name is classified into a [`ReceiverFamily`] by its receiver
//! type (the part before the first `/`). Three candidate pipelines are built
//! from those families, each with a fixed processor and exporter list:
//!
//! | Pipeline                | Receivers | Processors                            | Exporters                                   |
//! |-------------------------|-----------|---------------------------------------|---------------------------------------------|
//! | `metrics`               | metrics   | `batch/local`                         | `otlphttp/metrics-local`, `debug/x-agentic-ai` |
//! | `logs`                  | logs      | `batch/local`                         | `debug/x-agentic-ai`                        |
//! | `metrics/f5-datafabric` | metrics   | batch, interval, attributes (f5)      | `otlp/f5-datafabric`                        |
//!
//! The extended export pipeline is a candidate only when `f5_data_export` is
//! `true` and `f5_pipeline_default` is non-empty in the defaults. A candidate
//! is emitted if and only if it ends up with at least one receiver.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::document::{self, Document};
use crate::types::Notice;

/// Defaults key of the boolean switch for the extended export pipeline.
pub const FEATURE_FLAG_KEY: &str = "f5_data_export";

/// Defaults key of the settings block for the extended export pipeline.
pub const FEATURE_SETTINGS_KEY: &str = "f5_pipeline_default";

pub const METRICS_PIPELINE: &str = "metrics";
pub const LOGS_PIPELINE: &str = "logs";
pub const EXTENDED_EXPORT_PIPELINE: &str = "metrics/f5-datafabric";

/// The data family a receiver feeds, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiverFamily {
    /// Per-device metric scrapers (`bigip/<device>`).
    Metrics,
    /// Log sources (`syslog`, `syslog/<name>`).
    Logs,
}

impl ReceiverFamily {
    /// Classify a receiver name by its receiver type.
    pub fn classify(name: &str) -> Option<Self> {
        let kind = name.split_once('/').map_or(name, |(kind, _)| kind);
        match kind {
            "bigip" => Some(ReceiverFamily::Metrics),
            "syslog" => Some(ReceiverFamily::Logs),
            _ => None,
        }
    }
}

/// One fixed pipeline shape: which family feeds it and the stages it runs.
#[derive(Debug, Clone, Copy)]
pub struct PipelineTemplate {
    pub name: &'static str,
    pub family: ReceiverFamily,
    pub processors: &'static [&'static str],
    pub exporters: &'static [&'static str],
}

pub const METRICS_TEMPLATE: PipelineTemplate = PipelineTemplate {
    name: METRICS_PIPELINE,
    family: ReceiverFamily::Metrics,
    processors: &["batch/local"],
    exporters: &["otlphttp/metrics-local", "debug/x-agentic-ai"],
};

pub const LOGS_TEMPLATE: PipelineTemplate = PipelineTemplate {
    name: LOGS_PIPELINE,
    family: ReceiverFamily::Logs,
    processors: &["batch/local"],
    exporters: &["debug/x-agentic-ai"],
};

pub const EXTENDED_EXPORT_TEMPLATE: PipelineTemplate = PipelineTemplate {
    name: EXTENDED_EXPORT_PIPELINE,
    family: ReceiverFamily::Metrics,
    processors: &[
        "batch/f5-datafabric",
        "interval/f5-datafabric",
        "attributes/f5-datafabric",
    ],
    exporters: &["otlp/f5-datafabric"],
};

/// A named pipeline's receivers, processors and exporters.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PipelineDefinition {
    pub receivers: Vec<String>,
    pub processors: Vec<String>,
    pub exporters: Vec<String>,
}

impl PipelineDefinition {
    fn from_template(template: &PipelineTemplate, receivers: Vec<String>) -> Self {
        Self {
            receivers,
            processors: template.processors.iter().map(|s| s.to_string()).collect(),
            exporters: template.exporters.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered pipeline name to definition. Serializes as a mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineSet {
    entries: Vec<(String, PipelineDefinition)>,
}

impl PipelineSet {
    pub fn get(&self, name: &str) -> Option<&PipelineDefinition> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, def)| def)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PipelineDefinition)> {
        self.entries.iter().map(|(n, def)| (n.as_str(), def))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The set as a document, pipeline name to definition.
    pub fn to_document(&self) -> Document {
        self.entries
            .iter()
            .map(|(name, def)| {
                let value = serde_json::json!({
                    "receivers": def.receivers,
                    "processors": def.processors,
                    "exporters": def.exporters,
                });
                (name.clone(), value)
            })
            .collect()
    }

    fn push(&mut self, name: &str, def: PipelineDefinition) {
        self.entries.push((name.to_string(), def));
    }
}

impl Serialize for PipelineSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, def) in &self.entries {
            map.serialize_entry(name, def)?;
        }
        map.end()
    }
}

/// Output of [`assemble_pipelines`].
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineAssembly {
    pub pipelines: PipelineSet,
    pub notices: Vec<Notice>,
}

/// Whether the defaults switch the extended export pipeline on.
pub fn extended_export_enabled(defaults: &Document) -> bool {
    document::is_enabled(defaults.get(FEATURE_FLAG_KEY))
        && document::is_non_empty(defaults.get(FEATURE_SETTINGS_KEY))
}

/// Build the pipelines fed by `receiver_names`.
///
/// Receiver order inside each pipeline follows the order of `receiver_names`.
pub fn assemble_pipelines<'a, I>(receiver_names: I, defaults: &Document) -> PipelineAssembly
where
    I: IntoIterator<Item = &'a str>,
{
    let mut notices = Vec::new();
    let mut metrics = Vec::new();
    let mut logs = Vec::new();

    for name in receiver_names {
        match ReceiverFamily::classify(name) {
            Some(ReceiverFamily::Metrics) => metrics.push(name.to_string()),
            Some(ReceiverFamily::Logs) => logs.push(name.to_string()),
            None => {
                tracing::debug!(receiver = %name, "receiver matches no pipeline family");
                notices.push(Notice::UnclassifiedReceiver {
                    name: name.to_string(),
                });
            }
        }
    }

    let mut candidates = vec![(METRICS_TEMPLATE, metrics.clone()), (LOGS_TEMPLATE, logs)];
    if extended_export_enabled(defaults) {
        tracing::info!("F5 Datafabric pipeline enabled.");
        candidates.push((EXTENDED_EXPORT_TEMPLATE, metrics));
    } else {
        tracing::warn!("{}", Notice::ExtendedExportDisabled);
        notices.push(Notice::ExtendedExportDisabled);
    }

    let mut pipelines = PipelineSet::default();
    for (template, receivers) in candidates {
        if receivers.is_empty() {
            tracing::warn!(pipeline = template.name, "pipeline has no receivers; omitting");
            notices.push(Notice::PipelineOmitted {
                name: template.name.to_string(),
            });
            continue;
        }
        debug_assert!(
            receivers
                .iter()
                .all(|r| ReceiverFamily::classify(r) == Some(template.family))
        );
        pipelines.push(
            template.name,
            PipelineDefinition::from_template(&template, receivers),
        );
    }

    PipelineAssembly {
        pipelines,
        notices,
    }
}
