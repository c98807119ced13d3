//! Chime demo: inharmonic sine partials and shape swapping.
//!
//! Run with: RUST_LOG=debug cargo run -p wavebuilder-core --example chime_demo

use wavebuilder_core::{BuilderConfig, Oscillator, WaveBuilder, WaveShape};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    // --- Wind chime partials ---
    println!("=== Chime (512 samples, sample_max 32700) ===\n");

    let chimes = vec![
        Oscillator::sine(1.0, 0.6),
        Oscillator::sine(2.76, 0.2),
        Oscillator::sine(5.40, 0.1),
        Oscillator::sine(8.93, 0.1),
    ];
    let config = BuilderConfig::new(chimes, 512).with_sample_max(32700);
    let mut wave = match WaveBuilder::new(config) {
        Ok(wave) => wave,
        Err(err) => {
            eprintln!("chime rejected: {err}");
            return;
        }
    };

    let table = wave.wave_table();
    println!("summed amplitude: {:.2}", table.summed_amplitude());
    println!("loop distortion:  {:.1}%", table.loop_distortion());
    println!("peak:             {}", table.peak());
    println!("first samples:    {:?}\n", &table.as_slice()[..8]);

    // --- Same fundamental, different shapes ---
    println!("=== Shapes at amplitude 0.6 ===\n");

    for shape in WaveShape::ALL {
        if let Err(err) = wave.set_oscillators(vec![Oscillator::new(shape, 1.0, 0.6)]) {
            eprintln!("{shape}: {err}");
            continue;
        }
        let samples = wave.wave_table().as_slice();
        println!(
            "{:<10} {:>7} {:>7} {:>7} {:>7} ...",
            shape, samples[0], samples[64], samples[128], samples[192]
        );
    }

    // --- A rejected overtone keeps the previous table ---
    println!("\n=== Overtone too high for 32 samples ===\n");

    if let Err(err) = wave.set_table_length(32) {
        eprintln!("resize rejected: {err}");
        return;
    }
    let before = wave.wave_table().clone();
    let result = wave.set_oscillators(vec![
        Oscillator::sine(1.0, 0.5),
        Oscillator::new(WaveShape::Triangle, 12.0, 0.5),
    ]);
    match result {
        Ok(()) => println!("accepted"),
        Err(err) => println!("rejected: {err}"),
    }
    println!("previous table kept: {}", wave.wave_table() == &before);
}
