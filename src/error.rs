use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the three generation inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    /// Shared receiver defaults and feature flags.
    Defaults,
    /// Per-instance receiver overrides.
    Instances,
    /// Externally defined receivers (the syslog feed).
    External,
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputRole::Defaults => write!(f, "defaults"),
            InputRole::Instances => write!(f, "instance overrides"),
            InputRole::External => write!(f, "external receivers"),
        }
    }
}

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum GenError {
    #[error("The {role} input is unavailable: {reason}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(otelcol_gen::input_unavailable),
            help("check the input path and that the file holds a non-empty YAML mapping")
        )
    )]
    InputUnavailable { role: InputRole, reason: String },

    #[error("The {role} input is malformed: {reason}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(code(otelcol_gen::malformed_input))
    )]
    MalformedInput { role: InputRole, reason: String },

    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize {what}: {source}")]
    SerializeError {
        what: &'static str,
        source: serde_yaml::Error,
    },

    #[error("Failed to parse settings file {path}: {source}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(code(otelcol_gen::settings_parse))
    )]
    SettingsParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Settings error: {0}")]
    SettingsError(#[from] confique::Error),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}
