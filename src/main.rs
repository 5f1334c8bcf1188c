use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use otelcol_gen::{GenerateArgs, Generator, SettingsArgs};

/// Generate OpenTelemetry collector receiver and pipeline manifests.
#[derive(Parser, Debug)]
#[command(name = "otelcol-gen", version)]
struct Cli {
    /// Log at debug level (includes the generated manifests).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the manifests from the three input documents.
    Generate(GenerateArgs),
    /// Inspect or scaffold the tool's own settings file.
    Settings(SettingsArgs),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("OTELCOL_GEN_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let builder = Generator::builder();
    let result = match cli.command {
        Commands::Generate(args) => {
            let action = args.action();
            args.apply_overrides(builder).handle_and_print(&action)
        }
        Commands::Settings(args) => builder.handle_and_print(&args.into_action()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
