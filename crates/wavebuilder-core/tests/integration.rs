//! Integration tests for wavebuilder-core.
//!
//! Tests cover end-to-end table construction, validation failures,
//! reconfiguration and reproducibility across builders.

use rand::SeedableRng;
use rand::rngs::StdRng;
use wavebuilder_core::{BuildError, BuilderConfig, Oscillator, WaveBuilder, WaveShape};

fn chime() -> Vec<Oscillator> {
    vec![
        Oscillator::sine(1.0, 0.6),
        Oscillator::sine(2.76, 0.2),
        Oscillator::sine(5.40, 0.1),
        Oscillator::sine(8.93, 0.1),
    ]
}

// ---------------------------------------------------------------------------
// 1. Construction
// ---------------------------------------------------------------------------

#[test]
fn table_length_is_exact_for_every_shape() {
    for shape in WaveShape::ALL {
        for len in [16, 100, 333, 512, 1000] {
            let config = BuilderConfig::new(vec![Oscillator::new(shape, 1.0, 0.9)], len);
            let builder = WaveBuilder::from_seed(config, 3).unwrap();
            assert_eq!(builder.wave_table().len(), len, "{shape} at {len}");
        }
    }
}

#[test]
fn two_sine_scenario() {
    let config = BuilderConfig::new(
        vec![Oscillator::sine(1.0, 0.6), Oscillator::sine(2.0, 0.2)],
        512,
    )
    .with_sample_max(32700);
    let builder = WaveBuilder::new(config).unwrap();
    let table = builder.wave_table();

    assert_eq!(table.len(), 512);
    assert_eq!(table.as_slice()[0], 0);
    assert!((builder.summed_amplitude() - 0.8).abs() < 1e-12);
    assert!(table.peak() <= 32700);
}

#[test]
fn absolute_frequencies_match_ratios() {
    let hz = BuilderConfig::new(
        vec![Oscillator::sine(220.0, 0.5), Oscillator::new(WaveShape::Saw, 660.0, 0.25)],
        256,
    );
    let ratios = BuilderConfig::new(
        vec![Oscillator::sine(1.0, 0.5), Oscillator::new(WaveShape::Saw, 3.0, 0.25)],
        256,
    );
    let a = WaveBuilder::from_seed(hz, 0).unwrap();
    let b = WaveBuilder::from_seed(ratios, 0).unwrap();
    assert_eq!(a.wave_table(), b.wave_table());
    assert_eq!(a.oscillators(), b.oscillators());
}

#[test]
fn oscillator_order_does_not_change_the_sum() {
    let forward = BuilderConfig::new(chime(), 512);
    let mut reversed_oscillators = chime();
    reversed_oscillators.reverse();
    let reversed = BuilderConfig::new(reversed_oscillators, 512);

    let a = WaveBuilder::from_seed(forward, 0).unwrap();
    let b = WaveBuilder::from_seed(reversed, 0).unwrap();
    assert_eq!(a.wave_table().as_slice(), b.wave_table().as_slice());
}

#[test]
fn identical_configs_are_bit_identical() {
    let shapes = [WaveShape::Sine, WaveShape::Square, WaveShape::Saw, WaveShape::Triangle];
    let oscillators: Vec<Oscillator> = shapes
        .iter()
        .enumerate()
        .map(|(i, &shape)| Oscillator::new(shape, (i + 1) as f64, 0.2))
        .collect();
    let config = BuilderConfig::new(oscillators, 640).with_sample_max(20000);

    // different noise seeds must not matter without a noise oscillator
    let a = WaveBuilder::from_seed(config.clone(), 1).unwrap();
    let b = WaveBuilder::from_seed(config, 2).unwrap();
    assert_eq!(a.wave_table(), b.wave_table());
}

#[test]
fn custom_rng_drives_noise() {
    let config = BuilderConfig::new(vec![Oscillator::new(WaveShape::Noise, 1.0, 0.25)], 1024);
    let a = WaveBuilder::with_rng(config.clone(), StdRng::seed_from_u64(9)).unwrap();
    let b = WaveBuilder::with_rng(config, StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(a.wave_table(), b.wave_table());

    let bound = 8192;
    assert!(a.wave_table().as_slice().iter().all(|s| s.unsigned_abs() <= bound));
}

#[test]
fn noise_statistics() {
    let config = BuilderConfig::new(vec![Oscillator::new(WaveShape::Noise, 1.0, 1.0)], 8192)
        .with_loop_smoothing(false);
    let builder = WaveBuilder::from_seed(config, 11).unwrap();
    let samples = builder.wave_table().as_slice();

    let mean = samples.iter().map(|&s| f64::from(s)).sum::<f64>() / samples.len() as f64;
    // uniform over ±32767: std dev ≈ 18918, standard error ≈ 209
    assert!(mean.abs() < 2000.0, "mean {mean}");
    assert!(samples.iter().any(|&s| s > 16000));
    assert!(samples.iter().any(|&s| s < -16000));
}

// ---------------------------------------------------------------------------
// 2. Validation
// ---------------------------------------------------------------------------

#[test]
fn amplitude_budget_rejects_overflowing_sets() {
    let config = BuilderConfig::new(
        vec![Oscillator::sine(1.0, 0.6), Oscillator::sine(1.5, 0.6)],
        512,
    );
    match WaveBuilder::new(config) {
        Err(BuildError::InvalidAmplitudeBudget { summed }) => {
            assert!((summed - 1.2).abs() < 1e-12);
        }
        other => panic!("expected budget error, got {other:?}"),
    }
}

#[test]
fn resolution_error_suggests_a_working_length() {
    let oscillators = vec![
        Oscillator::sine(1.0, 0.5),
        Oscillator::new(WaveShape::Triangle, 50.0, 0.5),
    ];
    let config = BuilderConfig::new(oscillators.clone(), 8);
    let Err(BuildError::InsufficientResolution {
        min_table_length, ..
    }) = WaveBuilder::new(config)
    else {
        panic!("expected resolution error");
    };

    let config = BuilderConfig::new(oscillators, min_table_length);
    assert!(WaveBuilder::new(config).is_ok());
}

#[test]
fn lambda_factor_limits_high_overtones() {
    // 40 samples cover a 16th-overtone sine only with lambda up to 1.25
    let oscillators = vec![Oscillator::sine(1.0, 0.5), Oscillator::sine(16.0, 0.5)];
    assert!(BuilderConfig::new(oscillators.clone(), 40).validate().is_ok());
    assert!(
        BuilderConfig::new(oscillators, 40)
            .with_lambda_factor(1.5)
            .validate()
            .is_err()
    );
}

// ---------------------------------------------------------------------------
// 3. Reconfiguration
// ---------------------------------------------------------------------------

#[test]
fn reconfigured_builder_matches_fresh_builder() {
    let mut builder = WaveBuilder::from_seed(BuilderConfig::new(chime(), 512), 0).unwrap();
    builder
        .set_oscillators(vec![
            Oscillator::new(WaveShape::Square, 1.0, 0.5),
            Oscillator::new(WaveShape::Triangle, 2.0, 0.25),
        ])
        .unwrap();
    builder.set_lambda_factor(2.0).unwrap();

    let fresh = WaveBuilder::from_seed(
        BuilderConfig::new(
            vec![
                Oscillator::new(WaveShape::Square, 1.0, 0.5),
                Oscillator::new(WaveShape::Triangle, 2.0, 0.25),
            ],
            512,
        )
        .with_lambda_factor(2.0),
        0,
    )
    .unwrap();

    assert_eq!(builder.wave_table(), fresh.wave_table());
}

#[test]
fn rejected_table_length_keeps_old_table() {
    let oscillators = vec![
        Oscillator::sine(1.0, 0.5),
        Oscillator::new(WaveShape::Saw, 8.0, 0.5),
    ];
    let mut builder = WaveBuilder::from_seed(BuilderConfig::new(oscillators, 256), 0).unwrap();
    let before = builder.wave_table().clone();

    let err = builder.set_table_length(16).unwrap_err();
    assert!(matches!(err, BuildError::InsufficientResolution { index: 1, .. }));
    assert_eq!(builder.table_length(), 256);
    assert_eq!(builder.wave_table(), &before);
}

#[test]
fn smoothing_toggle_only_touches_the_seam() {
    let config = BuilderConfig::new(vec![Oscillator::new(WaveShape::Triangle, 1.0, 0.8)], 300)
        .with_lambda_factor(1.25);
    let mut builder = WaveBuilder::from_seed(config, 0).unwrap();
    let smoothed = builder.wave_table().clone();
    builder.set_loop_smoothing(false).unwrap();
    let raw = builder.wave_table().clone();

    let n = raw.len();
    assert_eq!(&smoothed.as_slice()[..n - 2], &raw.as_slice()[..n - 2]);
    assert_eq!(smoothed.as_slice()[n - 1], smoothed.as_slice()[0]);
    assert_eq!(smoothed.loop_distortion(), 0.0);
    if raw.as_slice()[n - 1] != raw.as_slice()[0] {
        assert!(raw.loop_distortion() > 0.0);
    }
}
