//! The tool's own settings: where the inputs are read from and where the
//! manifests are written.
//!
//! Defined with confique so the compiled defaults, the doc comments shown in
//! `settings gen`, and the keys accepted from files, environment and CLI all
//! come from this one struct.

use std::path::PathBuf;

use confique::Config;
use serde::Serialize;

#[derive(Config, Serialize, Debug, Clone, PartialEq)]
pub struct Settings {
    /// Input documents.
    #[config(nested)]
    pub inputs: InputSettings,

    /// Generated manifests.
    #[config(nested)]
    pub outputs: OutputSettings,
}

#[derive(Config, Serialize, Debug, Clone, PartialEq)]
pub struct InputSettings {
    /// Shared receiver defaults and the F5 Datafabric feature switch.
    #[config(default = "/app/config/x_robot_ai_data.yaml")]
    pub defaults: PathBuf,

    /// Per-device BIG-IP receiver overrides.
    #[config(default = "/app/config/bigip_receivers.yml")]
    pub instances: PathBuf,

    /// Syslog receiver definitions, used verbatim.
    #[config(default = "/app/config/syslog/syslog_data.yaml")]
    pub external: PathBuf,
}

#[derive(Config, Serialize, Debug, Clone, PartialEq)]
pub struct OutputSettings {
    /// Receiver manifest path.
    #[config(default = "/app/otel-collector/receivers.yml")]
    pub receivers: PathBuf,

    /// Pipeline manifest path.
    #[config(default = "/app/otel-collector/pipelines/pipelines.yml")]
    pub pipelines: PathBuf,

    /// Collector manifest path. Not written unless set.
    pub collector: Option<PathBuf>,

    /// Receiver manifest location as seen by the collector.
    #[config(default = "/etc/otelcol-contrib/receivers.yaml")]
    pub receivers_include: String,

    /// Pipeline manifest location as seen by the collector.
    #[config(default = "/etc/otelcol-contrib/pipelines.yaml")]
    pub pipelines_include: String,
}

impl OutputSettings {
    pub fn includes(&self) -> crate::collector::IncludePaths {
        crate::collector::IncludePaths {
            receivers: self.receivers_include.clone(),
            pipelines: self.pipelines_include.clone(),
        }
    }
}
