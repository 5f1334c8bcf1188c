//! Operation outcomes and the settings operations behind `settings gen` and
//! `settings list`.

use std::fmt;
use std::path::PathBuf;

use serde_json::Value;

use crate::emit::RenderedManifest;
use crate::error::GenError;
use crate::settings::Settings;
use crate::types::Notice;

/// Result of an operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Manifests were generated and written.
    Generated {
        written: Vec<PathBuf>,
        notices: Vec<Notice>,
    },
    /// A dry run: the manifests that would have been written.
    Previewed {
        manifests: Vec<RenderedManifest>,
        notices: Vec<Notice>,
    },
    /// A generated settings template.
    Template(String),
    /// Confirmation that a settings template was written to a file.
    TemplateWritten { path: PathBuf },
    /// All resolved settings as key-value pairs.
    Listing { entries: Vec<(String, String)> },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Generated { written, notices } => {
                write_notices(f, notices)?;
                for (i, path) in written.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "Wrote {}", path.display())?;
                }
                Ok(())
            }
            Outcome::Previewed { manifests, notices } => {
                write_notices(f, notices)?;
                for manifest in manifests {
                    writeln!(f, "# {} ({})", manifest.what, manifest.path.display())?;
                    write!(f, "{}", manifest.content)?;
                }
                Ok(())
            }
            Outcome::Template(t) => write!(f, "{t}"),
            Outcome::TemplateWritten { path } => {
                write!(f, "Settings template written to {}", path.display())
            }
            Outcome::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
        }
    }
}

fn write_notices(f: &mut fmt::Formatter<'_>, notices: &[Notice]) -> fmt::Result {
    for notice in notices {
        writeln!(f, "warning: {notice}")?;
    }
    Ok(())
}

/// Generate a commented TOML template from the settings' doc comments.
pub fn generate_template() -> String {
    confique::toml::template::<Settings>(confique::toml::FormatOptions::default())
}

/// List the resolved settings as dotted key-value pairs.
pub fn list_values(settings: &Settings) -> Result<Outcome, GenError> {
    let value = serde_json::to_value(settings).map_err(|e| GenError::InvalidValue {
        key: "<list>".into(),
        reason: e.to_string(),
    })?;
    let mut entries = Vec::new();
    flatten_into(&value, "", &mut entries);
    Ok(Outcome::Listing { entries })
}

fn flatten_into(value: &Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let dotted = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(child, &dotted, out);
            }
        }
        Value::Null => out.push((prefix.to_string(), "<not set>".to_string())),
        Value::String(s) => out.push((prefix.to_string(), s.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}
