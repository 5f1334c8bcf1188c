//! Layered receiver and pipeline manifest generation for an OpenTelemetry
//! collector monitoring F5 BIG-IP devices.
//!
//! Three YAML documents go in: shared receiver **defaults**, per-device
//! **instance overrides**, and an **external** block of syslog receivers used
//! verbatim. Two manifests come out: a receiver manifest and a pipeline
//! manifest, plus optionally a top-level collector manifest that includes
//! both.
//!
//! ```ignore
//! let outcome = Generator::builder()
//!     .cli_override("inputs.defaults", Some("/srv/defaults.yaml"))
//!     .handle(&Action::Generate { dry_run: false })?;
//! ```
//!
//! # Generation
//!
//! Every instance receiver is the receiver defaults deep-merged with that
//! instance's overrides (see [`merge::deep_merge`]), minus the `pipeline`
//! selector field. External receivers are appended and win name collisions.
//!
//! Pipelines are keyed on the receiver type, the part of the name before the
//! first `/`:
//!
//! ```text
//! bigip/...   → metrics                 batch/local → otlphttp/metrics-local, debug/x-agentic-ai
//! syslog/...  → logs                    batch/local → debug/x-agentic-ai
//! bigip/...   → metrics/f5-datafabric   only with f5_data_export: true
//!                                       and a non-empty f5_pipeline_default
//! ```
//!
//! A pipeline with no receivers is left out. Everything the operator should
//! know about but that does not stop the run (collisions, unclassified names,
//! omitted pipelines) is returned as a [`Notice`].
//!
//! Generation is all-or-nothing: if any input is missing, empty or not a
//! mapping, nothing is written.
//!
//! # Settings
//!
//! Where inputs are read from and outputs written to is itself layered
//! configuration, defined by [`Settings`]:
//!
//! ```text
//! Compiled defaults     #[config(default = ...)]
//!        ↑ overridden by
//! Settings files        otelcol-gen.toml in the platform config dir, then cwd
//!        ↑ overridden by
//! Environment vars      OTELCOL_GEN__INPUTS__DEFAULTS, ...
//!        ↑ overridden by
//! Overrides             .cli_override() / generate --defaults ...
//! ```
//!
//! # Logging
//!
//! Progress is reported through [`tracing`]. The library never installs a
//! subscriber; the `otelcol-gen` binary does.

pub mod collector;
pub mod document;
pub mod emit;
pub mod error;
pub mod generate;
pub mod load;
pub mod merge;
pub mod pipelines;
pub mod receivers;
pub mod settings;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod env;
mod file;
mod ops;
mod overrides;
mod resolve;

#[cfg(test)]
mod fixtures;

pub use builder::{APP_NAME, Generator, GeneratorBuilder};
#[cfg(feature = "clap")]
pub use cli::{GenerateArgs, SettingsArgs, SettingsSubcommand};
pub use document::Document;
pub use error::{GenError, InputRole};
pub use generate::{Generation, GenerationInputs, GenerationResult, generate};
pub use ops::Outcome;
pub use settings::Settings;
pub use types::{Action, Notice, SearchPath};
