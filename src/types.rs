use std::fmt;
use std::path::PathBuf;

/// Where to search for settings files.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPath {
    /// Platform config directory (XDG on Linux, ~/Library/Application Support on macOS).
    Platform,
    /// A subdirectory under the user's home directory, e.g. `Home(".otelcol-gen")`.
    Home(&'static str),
    /// Current working directory.
    Cwd,
    /// An explicit absolute path.
    Path(PathBuf),
}

/// A tool operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Generate the manifests; `dry_run` skips persisting them.
    Generate { dry_run: bool },
    /// Produce a commented settings template.
    SettingsGen { output: Option<PathBuf> },
    /// Show the resolved settings.
    SettingsList,
}

/// Something worth telling the operator about a run that is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// An external receiver replaced the instance receiver of the same name.
    ReceiverNameCollision { name: String },
    /// A receiver name belongs to no known family and feeds no pipeline.
    UnclassifiedReceiver { name: String },
    /// A candidate pipeline had no receivers and was left out.
    PipelineOmitted { name: String },
    /// The extended export pipeline is switched off or has no settings.
    ExtendedExportDisabled,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ReceiverNameCollision { name } => write!(
                f,
                "receiver '{name}' is defined by both the instance overrides and the external feed; the external definition is used"
            ),
            Notice::UnclassifiedReceiver { name } => {
                write!(f, "receiver '{name}' matches no pipeline family")
            }
            Notice::PipelineOmitted { name } => {
                write!(f, "pipeline '{name}' has no receivers and was omitted")
            }
            Notice::ExtendedExportDisabled => write!(
                f,
                "f5_data_export=true and a non-empty f5_pipeline_default are required to export metrics to F5 Datafabric"
            ),
        }
    }
}
