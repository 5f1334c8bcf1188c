//! Reading the three YAML input documents.
//!
//! Every failure to obtain a document (missing file, permission denied, broken
//! YAML) is reported as [`GenError::InputUnavailable`] for that input. An empty
//! file loads as null, which generation also rejects as unavailable.

use std::path::Path;

use serde_json::Value;

use crate::error::{GenError, InputRole};
use crate::generate::GenerationInputs;
use crate::settings::InputSettings;

/// Parse YAML text into a document.
pub fn parse_document(text: &str, role: InputRole) -> Result<Value, GenError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(text).map_err(|e| GenError::InputUnavailable {
        role,
        reason: format!("invalid YAML: {e}"),
    })
}

/// Read and parse one input file.
pub fn load_document(path: &Path, role: InputRole) -> Result<Value, GenError> {
    tracing::info!(path = %path.display(), "Loading {role}");
    let text = std::fs::read_to_string(path).map_err(|e| {
        let reason = match e.kind() {
            std::io::ErrorKind::NotFound => format!("{} does not exist", path.display()),
            std::io::ErrorKind::PermissionDenied => {
                format!("permission denied opening {}", path.display())
            }
            _ => format!("cannot read {}: {e}", path.display()),
        };
        GenError::InputUnavailable { role, reason }
    })?;
    let value = parse_document(&text, role).map_err(|e| match e {
        GenError::InputUnavailable { role, reason } => GenError::InputUnavailable {
            role,
            reason: format!("{}: {reason}", path.display()),
        },
        other => other,
    })?;
    tracing::info!(path = %path.display(), "Successfully loaded {role}");
    Ok(value)
}

/// Load all three inputs named by the settings.
pub fn load_inputs(inputs: &InputSettings) -> Result<GenerationInputs, GenError> {
    Ok(GenerationInputs {
        defaults: Some(load_document(&inputs.defaults, InputRole::Defaults)?),
        instances: Some(load_document(&inputs.instances, InputRole::Instances)?),
        external: Some(load_document(&inputs.external, InputRole::External)?),
    })
}
