//! WaveBuilder CLI - build composite single-cycle wave tables.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wavebuilder")]
#[command(author, version, about = "Composite single-cycle wave table builder", long_about = None)]
struct Cli {
    /// Log every rebuild with its configuration and diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a wave table and write it as WAV, Rust source or CSV
    Build(commands::build::BuildArgs),

    /// List, show and save presets
    Presets(commands::presets::PresetsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Build(args) => commands::build::run(args),
        Commands::Presets(args) => commands::presets::run(args),
    }
}
