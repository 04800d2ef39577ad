//! Themewright - WordPress theme generator
//!
//! Command-line front end for generating theme files and archives from
//! template documents.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use themewright::cli::{ComponentsArgs, ExitCode, ExportArgs, GenerateArgs};

/// Themewright - build WordPress themes from component lists
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate theme files into a directory
    Generate(GenerateArgs),
    /// Export a theme zip archive
    Export(ExportArgs),
    /// List available component types
    Components(ComponentsArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays machine-readable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Command::Generate(args) => args.execute(),
        Command::Export(args) => args.execute(),
        Command::Components(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.code.code());
    }
    std::process::exit(ExitCode::Success.code());
}
