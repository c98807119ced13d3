//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use clap::Args;
use wavebuilder_config::{Preset, load_preset};
use wavebuilder_core::{Oscillator, WaveBuilder};

/// Table parameters that override whatever a preset says.
#[derive(Args, Debug, Default)]
pub struct TableArgs {
    /// Oscillator as shape:frequency:amplitude (repeatable, replaces preset oscillators)
    #[arg(long = "osc", value_name = "SHAPE:FREQ:AMP")]
    pub oscillators: Vec<Oscillator>,

    /// Samples in the table
    #[arg(short = 'n', long)]
    pub table_length: Option<usize>,

    /// Peak sample value for amplitude 1.0 (1-32767)
    #[arg(long)]
    pub sample_max: Option<i16>,

    /// Fundamental wavelengths across the table
    #[arg(long)]
    pub lambda_factor: Option<f64>,

    /// Leave the loop seam as generated
    #[arg(long)]
    pub no_loop_smoothing: bool,

    /// Seed for noise oscillators
    #[arg(long)]
    pub seed: Option<u64>,
}

impl TableArgs {
    /// Overlay the given flags onto `preset`.
    pub fn apply(&self, preset: &mut Preset) {
        if !self.oscillators.is_empty() {
            preset.oscillators.clone_from(&self.oscillators);
        }
        if let Some(table_length) = self.table_length {
            preset.table_length = table_length;
        }
        if let Some(sample_max) = self.sample_max {
            preset.sample_max = sample_max;
        }
        if let Some(lambda_factor) = self.lambda_factor {
            preset.lambda_factor = lambda_factor;
        }
        if self.no_loop_smoothing {
            preset.loop_smoothing = false;
        }
        if self.seed.is_some() {
            preset.seed = self.seed;
        }
    }
}

/// Load a preset by factory name, user preset name or file path.
pub fn resolve_preset(name: &str) -> anyhow::Result<Preset> {
    load_preset(name).with_context(|| {
        format!("could not load preset '{name}'; run 'wavebuilder presets list' to see what exists")
    })
}

/// Print the configuration and diagnostics of a built table.
pub fn print_summary(builder: &WaveBuilder) {
    let table = builder.wave_table();
    println!("Table length:      {}", table.len());
    println!("Sample max:        {}", builder.sample_max());
    println!("Lambda factor:     {}", builder.lambda_factor());
    println!("Loop smoothing:    {}", builder.loop_smoothing());
    println!("Summed amplitude:  {:.3}", table.summed_amplitude());
    println!("Loop distortion:   {:.3}%", table.loop_distortion());
    println!("Peak:              {}", table.peak());
    println!("Oscillators:");
    for (i, osc) in builder.oscillators().iter().enumerate() {
        println!(
            "  {}. {:8} ratio {:<8.4} amplitude {:.3}",
            i + 1,
            osc.shape.name(),
            osc.frequency,
            osc.amplitude
        );
    }
}
