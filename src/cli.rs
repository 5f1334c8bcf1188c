//! Clap adapter.
//!
//! Compiled only with the `clap` Cargo feature (on by default). Provides
//! [`GenerateArgs`] and [`SettingsArgs`] for embedding in a clap
//! `#[derive(Parser)]` struct. Both convert into an [`Action`]; path flags
//! become dotted-key settings overrides via [`GenerateArgs::apply_overrides`].

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::builder::GeneratorBuilder;
use crate::types::Action;

/// Clap-derived args for the `generate` subcommand.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Print the manifests instead of writing them.
    #[arg(long)]
    pub dry_run: bool,

    /// Receiver defaults document.
    #[arg(long, value_name = "PATH")]
    pub defaults: Option<PathBuf>,

    /// Per-device receiver overrides document.
    #[arg(long, value_name = "PATH")]
    pub instances: Option<PathBuf>,

    /// External (syslog) receivers document.
    #[arg(long, value_name = "PATH")]
    pub external: Option<PathBuf>,

    /// Where to write the receiver manifest.
    #[arg(long, value_name = "PATH")]
    pub receivers_output: Option<PathBuf>,

    /// Where to write the pipeline manifest.
    #[arg(long, value_name = "PATH")]
    pub pipelines_output: Option<PathBuf>,

    /// Also write the collector manifest to this path.
    #[arg(long, value_name = "PATH")]
    pub collector_output: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn action(&self) -> Action {
        Action::Generate {
            dry_run: self.dry_run,
        }
    }

    /// The path flags as `(dotted_key, path)` settings overrides.
    pub fn overrides(&self) -> Vec<(&'static str, Option<&Path>)> {
        vec![
            ("inputs.defaults", self.defaults.as_deref()),
            ("inputs.instances", self.instances.as_deref()),
            ("inputs.external", self.external.as_deref()),
            ("outputs.receivers", self.receivers_output.as_deref()),
            ("outputs.pipelines", self.pipelines_output.as_deref()),
            ("outputs.collector", self.collector_output.as_deref()),
        ]
    }

    /// Feed every given path flag to the builder as a settings override.
    pub fn apply_overrides(&self, builder: GeneratorBuilder) -> GeneratorBuilder {
        self.overrides()
            .into_iter()
            .fold(builder, |builder, (key, path)| {
                builder.cli_override(key, path.map(|p| p.display().to_string()))
            })
    }
}

/// Clap-derived args for the `settings` subcommand group.
#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub action: Option<SettingsSubcommand>,
}

/// Available settings subcommands.
#[derive(Debug, Subcommand)]
pub enum SettingsSubcommand {
    /// Show all resolved settings.
    List,
    /// Generate a commented sample settings file.
    Gen {
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl SettingsArgs {
    /// Bare `settings` and `settings list` both map to `Action::SettingsList`.
    pub fn into_action(self) -> Action {
        match self.action {
            None | Some(SettingsSubcommand::List) => Action::SettingsList,
            Some(SettingsSubcommand::Gen { output }) => Action::SettingsGen { output },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Generator;
    use crate::types::SearchPath;
    use clap::Parser;
    use tempfile::TempDir;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: TestCommand,
    }

    #[derive(Debug, Subcommand)]
    enum TestCommand {
        Generate(GenerateArgs),
        Settings(SettingsArgs),
    }

    fn parse(args: &[&str]) -> TestCommand {
        TestCli::try_parse_from(args).unwrap().command
    }

    fn parse_generate(args: &[&str]) -> GenerateArgs {
        match parse(args) {
            TestCommand::Generate(g) => g,
            other => panic!("expected generate, got {other:?}"),
        }
    }

    fn parse_settings(args: &[&str]) -> Action {
        match parse(args) {
            TestCommand::Settings(s) => s.into_action(),
            other => panic!("expected settings, got {other:?}"),
        }
    }

    #[test]
    fn parse_generate_defaults() {
        let args = parse_generate(&["test", "generate"]);
        assert_eq!(args.action(), Action::Generate { dry_run: false });
        assert!(args.overrides().iter().all(|(_, p)| p.is_none()));
    }

    #[test]
    fn parse_generate_dry_run() {
        let args = parse_generate(&["test", "generate", "--dry-run"]);
        assert_eq!(args.action(), Action::Generate { dry_run: true });
    }

    #[test]
    fn parse_generate_paths() {
        let args = parse_generate(&[
            "test",
            "generate",
            "--defaults",
            "/d.yaml",
            "--collector-output",
            "/out/collector.yaml",
        ]);
        let overrides = args.overrides();
        assert!(overrides.contains(&("inputs.defaults", Some(Path::new("/d.yaml")))));
        assert!(overrides.contains(&(
            "outputs.collector",
            Some(Path::new("/out/collector.yaml"))
        )));
        assert!(overrides.contains(&("inputs.external", None)));
    }

    #[test]
    fn path_flags_reach_settings() {
        let dir = TempDir::new().unwrap();
        let args = parse_generate(&[
            "test",
            "generate",
            "--instances",
            "/srv/bigip.yml",
            "--pipelines-output",
            "/out/pipelines.yml",
        ]);
        let builder = Generator::builder()
            .search_paths(vec![SearchPath::Path(dir.path().to_path_buf())])
            .no_env();
        let settings = args.apply_overrides(builder).load().unwrap();
        assert_eq!(settings.inputs.instances, PathBuf::from("/srv/bigip.yml"));
        assert_eq!(settings.outputs.pipelines, PathBuf::from("/out/pipelines.yml"));
        assert_eq!(
            settings.inputs.defaults,
            PathBuf::from("/app/config/x_robot_ai_data.yaml")
        );
    }

    #[test]
    fn parse_bare_settings_is_list() {
        assert_eq!(parse_settings(&["test", "settings"]), Action::SettingsList);
        assert_eq!(
            parse_settings(&["test", "settings", "list"]),
            Action::SettingsList
        );
    }

    #[test]
    fn parse_settings_gen() {
        assert_eq!(
            parse_settings(&["test", "settings", "gen"]),
            Action::SettingsGen { output: None }
        );
        assert_eq!(
            parse_settings(&["test", "settings", "gen", "-o", "out.toml"]),
            Action::SettingsGen {
                output: Some(PathBuf::from("out.toml"))
            }
        );
    }

    #[test]
    fn invalid_subcommand_errors() {
        assert!(TestCli::try_parse_from(["test", "nope"]).is_err());
    }
}
