//! The `build` command: render a table and export it.

use anyhow::Context;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use wavebuilder_config::Preset;
use wavebuilder_io::{WavExport, render_csv, render_rust_source, write_wav};

use super::common::{TableArgs, print_summary, resolve_preset};

#[derive(Args)]
pub struct BuildArgs {
    /// Start from a preset (factory name, user preset name or TOML path)
    #[arg(short, long)]
    preset: Option<String>,

    #[command(flatten)]
    table: TableArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Wav)]
    format: OutputFormat,

    /// Times the table is repeated in a WAV file
    #[arg(long, default_value_t = 1)]
    cycles: usize,

    /// Sample rate written to the WAV header
    #[arg(long, default_value_t = 48000)]
    sample_rate: u32,

    /// Static name for Rust output (defaults to the preset name)
    #[arg(long)]
    name: Option<String>,

    /// Output file; text formats go to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// 16-bit mono WAV
    Wav,
    /// Rust `static` array
    Rust,
    /// index,sample CSV
    Csv,
}

pub fn run(args: BuildArgs) -> anyhow::Result<()> {
    let mut preset = match &args.preset {
        Some(name) => resolve_preset(name)?,
        None => Preset::new("wave_table"),
    };
    args.table.apply(&mut preset);

    if preset.oscillators.is_empty() {
        anyhow::bail!("no oscillators given; pass --preset NAME or at least one --osc SHAPE:FREQ:AMP");
    }

    let builder = preset
        .build()
        .with_context(|| format!("cannot build '{}'", preset.name))?;
    let table = builder.wave_table();

    let text = match args.format {
        OutputFormat::Wav => None,
        OutputFormat::Rust => {
            let name = args.name.as_deref().unwrap_or(&preset.name);
            Some(render_rust_source(name, table))
        }
        OutputFormat::Csv => Some(render_csv(table)),
    };

    match (text, &args.output) {
        (None, None) => anyhow::bail!("WAV output needs a file; pass -o PATH"),
        (None, Some(path)) => {
            let export = WavExport {
                sample_rate: args.sample_rate,
                cycles: args.cycles,
            };
            write_wav(path, table, export)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        (Some(text), Some(path)) => {
            std::fs::write(path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        (Some(text), None) => {
            print!("{text}");
            return Ok(());
        }
    }

    if let Some(path) = &args.output {
        println!("Wrote {}", path.display());
        println!();
    }
    print_summary(&builder);
    Ok(())
}
