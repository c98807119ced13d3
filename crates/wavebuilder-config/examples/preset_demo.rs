//! Preset demo: factory presets, validation and saving to disk.
//!
//! Run with: cargo run -p wavebuilder-config --example preset_demo

use wavebuilder_config::{Preset, factory_preset_names, get_factory_preset, validate_preset};
use wavebuilder_core::{Oscillator, WaveShape};

fn main() {
    println!("=== Factory Presets ===\n");

    for name in factory_preset_names() {
        let Some(preset) = get_factory_preset(name) else {
            continue;
        };
        match preset.build() {
            Ok(builder) => println!(
                "{:10} {:2} oscillators, {:5} samples, peak {:5}, summed amplitude {:.2}",
                name,
                preset.oscillators.len(),
                builder.wave_table().len(),
                builder.wave_table().peak(),
                builder.summed_amplitude(),
            ),
            Err(e) => println!("{name:10} failed: {e}"),
        }
    }

    println!("\n=== Custom Preset ===\n");

    let preset = Preset::new("Reedy")
        .with_description("Square with a saw edge")
        .with_oscillator(Oscillator::new(WaveShape::Square, 1.0, 0.6))
        .with_oscillator(Oscillator::new(WaveShape::Saw, 2.0, 0.3));

    match preset.to_toml() {
        Ok(text) => println!("{text}"),
        Err(e) => println!("serialize failed: {e}"),
    }

    println!("=== Validation ===\n");

    let broken = Preset::new("")
        .with_table_length(16)
        .with_oscillator(Oscillator::sine(1.0, 0.9))
        .with_oscillator(Oscillator::new(WaveShape::Triangle, 12.0, 0.4));

    match validate_preset(&broken) {
        Ok(()) => println!("unexpectedly valid"),
        Err(e) => println!("{e}"),
    }

    let dir = std::env::temp_dir().join("wavebuilder-preset-demo");
    let path = dir.join("reedy.toml");
    match preset.save(&path) {
        Ok(()) => println!("\nSaved to {}", path.display()),
        Err(e) => println!("\nSave failed: {e}"),
    }
}
