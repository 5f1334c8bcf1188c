//! Settings resolution: merge all settings layers and produce typed [`Settings`].
//!
//! Operates on pre-loaded data (`SettingsInput`) with no I/O, making the full
//! pipeline testable with synthetic inputs. Steps:
//!
//! 1. Parse and deep-merge settings files (later overrides earlier)
//! 2. Deep-merge env vars on top
//! 3. Check and deep-merge CLI overrides on top (highest priority)
//! 4. Deserialize the merged document into the settings layer
//! 5. Let confique fill defaults and validate required fields

use std::path::PathBuf;

use confique::Config;
use serde_json::Value;

use crate::document::Document;
use crate::env;
use crate::error::GenError;
use crate::merge::deep_merge;
use crate::overrides;
use crate::settings::Settings;

/// All pre-loaded data needed to resolve the settings. No I/O happens here.
pub struct SettingsInput {
    /// File contents in precedence order: first = lowest priority, last = highest.
    pub files: Vec<(PathBuf, String)>,
    /// Raw environment variable pairs (pass `std::env::vars().collect()` or synthetic data).
    pub env_vars: Vec<(String, String)>,
    /// Env var prefix (e.g. `"OTELCOL_GEN"`). `None` means env disabled.
    pub env_prefix: Option<String>,
    /// CLI overrides as `(dotted_key, value)` pairs.
    pub cli_overrides: Vec<(String, Value)>,
}

/// Resolve settings from pre-loaded inputs.
pub fn resolve(input: SettingsInput) -> Result<Settings, GenError> {
    let mut merged = Document::new();
    for (path, content) in &input.files {
        let table: toml::Table =
            toml::from_str(content).map_err(|e| GenError::SettingsParseError {
                path: path.clone(),
                source: e,
            })?;
        let layer = match serde_json::to_value(table) {
            Ok(Value::Object(map)) => map,
            Ok(_) => Document::new(),
            Err(e) => {
                return Err(GenError::InvalidValue {
                    key: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        };
        merged = deep_merge(merged, layer);
    }

    if let Some(prefix) = &input.env_prefix {
        let env_layer = env::env_to_document(prefix, input.env_vars);
        merged = deep_merge(merged, env_layer);
    }

    if !input.cli_overrides.is_empty() {
        let valid = overrides::valid_keys(&Settings::META);
        if let Some((key, _)) = input.cli_overrides.iter().find(|(k, _)| !valid.contains(k)) {
            return Err(GenError::InvalidValue {
                key: key.clone(),
                reason: "not a known setting".into(),
            });
        }
        let cli_layer = overrides::overrides_to_document(&input.cli_overrides);
        merged = deep_merge(merged, cli_layer);
    }

    let layer: <Settings as Config>::Layer =
        serde_json::from_value(Value::Object(merged)).map_err(|e| GenError::InvalidValue {
            key: "<merged>".into(),
            reason: e.to_string(),
        })?;

    Settings::builder()
        .preloaded(layer)
        .load()
        .map_err(GenError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty_input() -> SettingsInput {
        SettingsInput {
            files: vec![],
            env_vars: vec![],
            env_prefix: None,
            cli_overrides: vec![],
        }
    }

    #[test]
    fn defaults_only() {
        let settings = resolve(empty_input()).unwrap();
        assert_eq!(
            settings.inputs.external,
            PathBuf::from("/app/config/syslog/syslog_data.yaml")
        );
        assert_eq!(settings.outputs.collector, None);
    }

    #[test]
    fn file_overrides_default() {
        let input = SettingsInput {
            files: vec![(
                "otelcol-gen.toml".into(),
                "[inputs]\ndefaults = \"/srv/defaults.yaml\"\n".into(),
            )],
            ..empty_input()
        };
        let settings = resolve(input).unwrap();
        assert_eq!(settings.inputs.defaults, PathBuf::from("/srv/defaults.yaml"));
        assert_eq!(
            settings.inputs.instances,
            PathBuf::from("/app/config/bigip_receivers.yml")
        );
    }

    #[test]
    fn later_file_overrides_earlier() {
        let input = SettingsInput {
            files: vec![
                ("first.toml".into(), "[outputs]\nreceivers = \"/1\"\n".into()),
                ("second.toml".into(), "[outputs]\nreceivers = \"/2\"\n".into()),
            ],
            ..empty_input()
        };
        let settings = resolve(input).unwrap();
        assert_eq!(settings.outputs.receivers, PathBuf::from("/2"));
    }

    #[test]
    fn env_overrides_file() {
        let input = SettingsInput {
            files: vec![("a.toml".into(), "[outputs]\nreceivers = \"/file\"\n".into())],
            env_vars: vec![("OTELCOL_GEN__OUTPUTS__RECEIVERS".into(), "/env".into())],
            env_prefix: Some("OTELCOL_GEN".into()),
            ..empty_input()
        };
        let settings = resolve(input).unwrap();
        assert_eq!(settings.outputs.receivers, PathBuf::from("/env"));
    }

    #[test]
    fn env_ignored_when_disabled() {
        let input = SettingsInput {
            env_vars: vec![("OTELCOL_GEN__OUTPUTS__RECEIVERS".into(), "/env".into())],
            env_prefix: None,
            ..empty_input()
        };
        let settings = resolve(input).unwrap();
        assert_eq!(
            settings.outputs.receivers,
            PathBuf::from("/app/otel-collector/receivers.yml")
        );
    }

    #[test]
    fn cli_overrides_all() {
        let input = SettingsInput {
            files: vec![("a.toml".into(), "[outputs]\nreceivers = \"/file\"\n".into())],
            env_vars: vec![("OTELCOL_GEN__OUTPUTS__RECEIVERS".into(), "/env".into())],
            env_prefix: Some("OTELCOL_GEN".into()),
            cli_overrides: vec![("outputs.receivers".into(), json!("/cli"))],
        };
        let settings = resolve(input).unwrap();
        assert_eq!(settings.outputs.receivers, PathBuf::from("/cli"));
    }

    #[test]
    fn sparse_merge_across_layers() {
        let input = SettingsInput {
            files: vec![(
                "a.toml".into(),
                "[inputs]\ndefaults = \"/file/defaults.yaml\"\n".into(),
            )],
            env_vars: vec![("APP__INPUTS__EXTERNAL".into(), "/env/syslog.yaml".into())],
            env_prefix: Some("APP".into()),
            cli_overrides: vec![("outputs.collector".into(), json!("/cli/collector.yaml"))],
        };
        let settings = resolve(input).unwrap();
        assert_eq!(settings.inputs.defaults, PathBuf::from("/file/defaults.yaml"));
        assert_eq!(settings.inputs.external, PathBuf::from("/env/syslog.yaml"));
        assert_eq!(
            settings.outputs.collector,
            Some(PathBuf::from("/cli/collector.yaml"))
        );
    }

    #[test]
    fn unknown_cli_override_rejected() {
        let input = SettingsInput {
            cli_overrides: vec![("outputs.typo".into(), json!("/x"))],
            ..empty_input()
        };
        let err = resolve(input).unwrap_err();
        assert!(err.to_string().contains("outputs.typo"));
    }

    #[test]
    fn broken_settings_file_is_parse_error() {
        let input = SettingsInput {
            files: vec![("bad.toml".into(), "[inputs\n".into())],
            ..empty_input()
        };
        let err = resolve(input).unwrap_err();
        assert!(matches!(err, GenError::SettingsParseError { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn wrong_type_is_invalid_value() {
        let input = SettingsInput {
            files: vec![("a.toml".into(), "inputs = 5\n".into())],
            ..empty_input()
        };
        assert!(resolve(input).is_err());
    }
}
