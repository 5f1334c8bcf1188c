use serde_json::Value;

use crate::emit;
use crate::error::GenError;
use crate::file;
use crate::generate;
use crate::load;
use crate::ops::{self, Outcome};
use crate::resolve::{self, SettingsInput};
use crate::settings::Settings;
use crate::types::{Action, SearchPath};

/// Default application name, used for the settings file name, the platform
/// settings directory and the env prefix.
pub const APP_NAME: &str = "otelcol-gen";

/// Entry point for building a generator run.
pub struct Generator;

impl Generator {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }
}

/// Builder for resolving the tool's settings and running an [`Action`].
///
/// Settings come from, lowest priority first: compiled defaults, settings
/// files found on the search paths, `{PREFIX}__*` environment variables, and
/// CLI overrides.
pub struct GeneratorBuilder {
    app_name: String,
    file_name: Option<String>,
    search_paths: Option<Vec<SearchPath>>,
    env_prefix: Option<String>,
    env_enabled: bool,
    cli_overrides: Vec<(String, Value)>,
}

impl GeneratorBuilder {
    fn new() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            file_name: None,
            search_paths: None,
            env_prefix: None,
            env_enabled: true,
            cli_overrides: Vec::new(),
        }
    }

    /// Set the application name. This derives:
    /// - `file_name` → `"{app_name}.toml"`
    /// - `env_prefix` → `"{APP_NAME}"` (uppercased, `-` becomes `_`)
    pub fn app_name(mut self, name: &str) -> Self {
        self.app_name = name.to_string();
        self
    }

    /// Override the settings file name (default: `"{app_name}.toml"`).
    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = Some(name.to_string());
        self
    }

    /// Replace the default search paths entirely.
    ///
    /// Paths are listed in **priority-ascending** order: the last entry has the
    /// highest priority.
    pub fn search_paths(mut self, paths: Vec<SearchPath>) -> Self {
        self.search_paths = Some(paths);
        self
    }

    /// Override the environment variable prefix.
    pub fn env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Disable environment variable loading entirely.
    pub fn no_env(mut self) -> Self {
        self.env_enabled = false;
        self
    }

    /// Add a CLI override. `None` values are ignored (useful for optional clap args).
    pub fn cli_override<V: Into<Value>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.cli_overrides.push((key.to_string(), v.into()));
        }
        self
    }

    fn effective_file_name(&self) -> String {
        match &self.file_name {
            Some(name) => name.clone(),
            None => format!("{}.toml", self.app_name),
        }
    }

    fn effective_search_paths(&self) -> Vec<SearchPath> {
        match &self.search_paths {
            Some(paths) => paths.clone(),
            None => vec![SearchPath::Platform, SearchPath::Cwd],
        }
    }

    fn effective_env_prefix(&self) -> Option<String> {
        if !self.env_enabled {
            return None;
        }
        if let Some(prefix) = &self.env_prefix {
            return Some(prefix.clone());
        }
        Some(self.app_name.to_uppercase().replace('-', "_"))
    }

    fn build_input(&self) -> Result<SettingsInput, GenError> {
        let files = file::load_settings_files(
            &self.effective_search_paths(),
            &self.effective_file_name(),
            &self.app_name,
        )?;
        let env_prefix = self.effective_env_prefix();
        let env_vars: Vec<(String, String)> = match env_prefix {
            Some(_) => std::env::vars().collect(),
            None => Vec::new(),
        };

        Ok(SettingsInput {
            files,
            env_vars,
            env_prefix,
            cli_overrides: self.cli_overrides.clone(),
        })
    }

    /// Resolve the settings through all layers.
    pub fn load(&self) -> Result<Settings, GenError> {
        let input = self.build_input()?;
        resolve::resolve(input)
    }

    /// Handle an `Action` and print the result to stdout.
    pub fn handle_and_print(&self, action: &Action) -> Result<(), GenError> {
        let outcome = self.handle(action)?;
        println!("{outcome}");
        Ok(())
    }

    /// Handle an `Action` (generate / settings gen / settings list).
    pub fn handle(&self, action: &Action) -> Result<Outcome, GenError> {
        match action {
            Action::Generate { dry_run } => {
                let settings = self.load()?;
                let inputs = load::load_inputs(&settings.inputs)?;
                let generation = generate::generate(inputs)?;

                let rendered = emit::render_all(&generation, &settings.outputs)?;
                for manifest in &rendered {
                    tracing::debug!("Generated {}:\n{}", manifest.what, manifest.content);
                }

                if *dry_run {
                    tracing::info!("Dry run, no files written");
                    return Ok(Outcome::Previewed {
                        manifests: rendered,
                        notices: generation.notices,
                    });
                }
                emit::persist(&rendered)?;
                Ok(Outcome::Generated {
                    written: rendered.into_iter().map(|m| m.path).collect(),
                    notices: generation.notices,
                })
            }
            Action::SettingsGen { output } => {
                let template = ops::generate_template();
                match output {
                    Some(path) => {
                        emit::write_manifest(path, &template)?;
                        Ok(Outcome::TemplateWritten { path: path.clone() })
                    }
                    None => Ok(Outcome::Template(template)),
                }
            }
            Action::SettingsList => {
                let settings = self.load()?;
                ops::list_values(&settings)
            }
        }
    }
}
