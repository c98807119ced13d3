//! Composite wave table construction.
//!
//! A [`WaveBuilder`] owns a [`BuilderConfig`] and the [`WaveTable`] built
//! from it. Every reconfiguration runs the full pipeline against a copy
//! of the configuration:
//!
//! 1. normalize frequencies to ratios of the fundamental
//! 2. check the amplitude budget
//! 3. check per-oscillator segment resolution
//! 4. generate every oscillator and sum
//! 5. smooth the loop seam
//! 6. compute diagnostics
//!
//! The new configuration and table are only published when all steps
//! succeed; a rejected reconfiguration leaves the builder untouched.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::BuildError;
use crate::generator::TableParams;
use crate::oscillator::{Oscillator, normalize_ratios, summed_amplitude};

/// Default peak sample magnitude.
pub const DEFAULT_SAMPLE_MAX: i16 = i16::MAX;

/// Default number of fundamental wavelengths per table.
pub const DEFAULT_LAMBDA_FACTOR: f64 = 1.0;

/// Slack allowed on the amplitude budget for floating-point accumulation.
pub const AMPLITUDE_BUDGET_EPSILON: f64 = 1e-9;

/// Minimum samples per waveform segment.
const MIN_SEGMENT_LEN: usize = 2;

/// Everything a wave table is built from.
///
/// # Example
///
/// ```rust
/// use wavebuilder_core::{BuilderConfig, Oscillator};
///
/// let config = BuilderConfig::new(vec![Oscillator::sine(1.0, 0.8)], 256)
///     .with_sample_max(32700)
///     .with_loop_smoothing(false);
/// assert_eq!(config.lambda_factor, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Oscillators to sum. Order only affects generation sequencing.
    pub oscillators: Vec<Oscillator>,
    /// Samples in the output table.
    pub table_length: usize,
    /// Peak magnitude for amplitude 1.0.
    #[serde(default = "default_sample_max")]
    pub sample_max: i16,
    /// Fundamental wavelengths represented across the table.
    #[serde(default = "default_lambda_factor")]
    pub lambda_factor: f64,
    /// Force `table[last] == table[0]` after summing.
    #[serde(default = "default_loop_smoothing")]
    pub loop_smoothing: bool,
}

fn default_sample_max() -> i16 {
    DEFAULT_SAMPLE_MAX
}

fn default_lambda_factor() -> f64 {
    DEFAULT_LAMBDA_FACTOR
}

fn default_loop_smoothing() -> bool {
    true
}

/// Normalized oscillators and their summed amplitude, ready to render.
struct Plan {
    oscillators: Vec<Oscillator>,
    summed_amplitude: f64,
}

impl BuilderConfig {
    /// Create a configuration with default `sample_max`, `lambda_factor`
    /// and loop smoothing enabled.
    pub fn new(oscillators: Vec<Oscillator>, table_length: usize) -> Self {
        Self {
            oscillators,
            table_length,
            sample_max: DEFAULT_SAMPLE_MAX,
            lambda_factor: DEFAULT_LAMBDA_FACTOR,
            loop_smoothing: true,
        }
    }

    /// Set the peak sample magnitude.
    pub fn with_sample_max(mut self, sample_max: i16) -> Self {
        self.sample_max = sample_max;
        self
    }

    /// Set the number of fundamental wavelengths per table.
    pub fn with_lambda_factor(mut self, lambda_factor: f64) -> Self {
        self.lambda_factor = lambda_factor;
        self
    }

    /// Enable or disable loop smoothing.
    pub fn with_loop_smoothing(mut self, loop_smoothing: bool) -> Self {
        self.loop_smoothing = loop_smoothing;
        self
    }

    /// Table-wide generation parameters.
    pub fn table_params(&self) -> TableParams {
        TableParams {
            table_length: self.table_length,
            sample_max: self.sample_max,
            lambda_factor: self.lambda_factor,
        }
    }

    /// Check every construction precondition without rendering.
    ///
    /// Returns the first problem found; see [`BuilderConfig::diagnose`]
    /// for the full list.
    pub fn validate(&self) -> Result<(), BuildError> {
        self.plan().map(|_| ()).map_err(|mut errors| errors.remove(0))
    }

    /// Every reason this configuration cannot be built. Empty when valid.
    pub fn diagnose(&self) -> Vec<BuildError> {
        self.plan().err().unwrap_or_default()
    }

    fn plan(&self) -> Result<Plan, Vec<BuildError>> {
        let mut errors = Vec::new();

        if self.oscillators.is_empty() {
            errors.push(BuildError::NoOscillators);
        }
        for (index, oscillator) in self.oscillators.iter().enumerate() {
            if let Some(reason) = oscillator.defect() {
                errors.push(BuildError::InvalidOscillator {
                    index,
                    oscillator: *oscillator,
                    reason,
                });
            }
        }
        if self.table_length < MIN_SEGMENT_LEN {
            errors.push(BuildError::InvalidTableLength(self.table_length));
        }
        if self.sample_max <= 0 {
            errors.push(BuildError::InvalidSampleMax(self.sample_max));
        }
        if !self.lambda_factor.is_finite() || self.lambda_factor <= 0.0 {
            errors.push(BuildError::InvalidLambdaFactor(self.lambda_factor));
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let oscillators = normalize_ratios(&self.oscillators);

        let summed = summed_amplitude(&oscillators);
        if summed > 1.0 + AMPLITUDE_BUDGET_EPSILON {
            errors.push(BuildError::InvalidAmplitudeBudget { summed });
        }

        let params = self.table_params();
        for (index, oscillator) in oscillators.iter().enumerate() {
            let ratio = oscillator.frequency;
            if params.segment_len(oscillator.shape, ratio) < MIN_SEGMENT_LEN {
                errors.push(BuildError::InsufficientResolution {
                    index,
                    oscillator: *oscillator,
                    table_length: self.table_length,
                    min_table_length: params.min_table_length(oscillator.shape, ratio),
                });
            }
        }

        if errors.is_empty() {
            Ok(Plan {
                oscillators,
                summed_amplitude: summed,
            })
        } else {
            Err(errors)
        }
    }
}

/// An immutable, built wave table with its diagnostics.
///
/// Cloning is cheap: the samples are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveTable {
    samples: Arc<[i16]>,
    oscillators: Arc<[Oscillator]>,
    loop_distortion: f64,
    summed_amplitude: f64,
}

impl WaveTable {
    /// The samples, one continuous cycle for looped playback.
    pub fn as_slice(&self) -> &[i16] {
        &self.samples
    }

    /// Shared handle to the samples.
    pub fn samples(&self) -> Arc<[i16]> {
        Arc::clone(&self.samples)
    }

    /// Samples scaled to `[-1.0, 1.0)` by dividing by 32768.
    pub fn to_f32(&self) -> Vec<f32> {
        self.samples
            .iter()
            .map(|&s| f32::from(s) / 32768.0)
            .collect()
    }

    /// The oscillators this table was built from, with normalized ratios.
    pub fn oscillators(&self) -> &[Oscillator] {
        &self.oscillators
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True for an empty table (never produced by a successful build).
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `|first - last| / sample_max × 100`, after smoothing.
    pub fn loop_distortion(&self) -> f64 {
        self.loop_distortion
    }

    /// Sum of absolute oscillator amplitudes.
    pub fn summed_amplitude(&self) -> f64 {
        self.summed_amplitude
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }
}

/// Builds and owns a composite wave table.
///
/// Generic over the random generator used by noise oscillators;
/// [`WaveBuilder::new`] seeds a [`StdRng`] from entropy and
/// [`WaveBuilder::from_seed`] makes noise reproducible.
///
/// # Example
///
/// ```rust
/// use wavebuilder_core::{BuilderConfig, Oscillator, WaveBuilder, WaveShape};
///
/// let config = BuilderConfig::new(
///     vec![
///         Oscillator::sine(1.0, 0.6),
///         Oscillator::new(WaveShape::Triangle, 3.0, 0.2),
///     ],
///     512,
/// );
/// let mut builder = WaveBuilder::new(config).unwrap();
/// assert_eq!(builder.wave_table().len(), 512);
///
/// builder.set_table_length(256).unwrap();
/// assert_eq!(builder.wave_table().len(), 256);
/// ```
#[derive(Debug)]
pub struct WaveBuilder<R = StdRng> {
    config: BuilderConfig,
    table: WaveTable,
    rng: R,
}

impl WaveBuilder<StdRng> {
    /// Build a table from `config`, with an entropy-seeded noise source.
    pub fn new(config: BuilderConfig) -> Result<Self, BuildError> {
        Self::from_seed(config, rand::random())
    }

    /// Build a table from `config` with a seeded noise source.
    pub fn from_seed(config: BuilderConfig, seed: u64) -> Result<Self, BuildError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngExt> WaveBuilder<R> {
    /// Build a table from `config`, drawing noise from `rng`.
    pub fn with_rng(config: BuilderConfig, mut rng: R) -> Result<Self, BuildError> {
        let (config, table) = rebuild(config, &mut rng)?;
        Ok(Self { config, table, rng })
    }

    /// The current table.
    pub fn wave_table(&self) -> &WaveTable {
        &self.table
    }

    /// The configuration the current table was built from. Oscillator
    /// frequencies are normalized ratios.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Oscillators with frequencies normalized to the fundamental.
    pub fn oscillators(&self) -> &[Oscillator] {
        &self.config.oscillators
    }

    /// Samples in the table.
    pub fn table_length(&self) -> usize {
        self.config.table_length
    }

    /// Peak magnitude for amplitude 1.0.
    pub fn sample_max(&self) -> i16 {
        self.config.sample_max
    }

    /// Fundamental wavelengths per table.
    pub fn lambda_factor(&self) -> f64 {
        self.config.lambda_factor
    }

    /// Whether the loop seam is smoothed.
    pub fn loop_smoothing(&self) -> bool {
        self.config.loop_smoothing
    }

    /// Loop distortion of the current table, in percent.
    pub fn loop_distortion(&self) -> f64 {
        self.table.loop_distortion
    }

    /// Summed absolute amplitude of the current oscillators.
    pub fn summed_amplitude(&self) -> f64 {
        self.table.summed_amplitude
    }

    /// Replace the oscillator list and rebuild.
    pub fn set_oscillators(&mut self, oscillators: Vec<Oscillator>) -> Result<(), BuildError> {
        self.reconfigure(|config| config.oscillators = oscillators)
    }

    /// Change the table length and rebuild.
    pub fn set_table_length(&mut self, table_length: usize) -> Result<(), BuildError> {
        self.reconfigure(|config| config.table_length = table_length)
    }

    /// Change the peak sample magnitude and rebuild.
    pub fn set_sample_max(&mut self, sample_max: i16) -> Result<(), BuildError> {
        self.reconfigure(|config| config.sample_max = sample_max)
    }

    /// Change the lambda factor and rebuild.
    pub fn set_lambda_factor(&mut self, lambda_factor: f64) -> Result<(), BuildError> {
        self.reconfigure(|config| config.lambda_factor = lambda_factor)
    }

    /// Enable or disable loop smoothing and rebuild.
    pub fn set_loop_smoothing(&mut self, loop_smoothing: bool) -> Result<(), BuildError> {
        self.reconfigure(|config| config.loop_smoothing = loop_smoothing)
    }

    /// Edit any number of fields and rebuild once.
    ///
    /// The edit is applied to a copy; on error the builder keeps its
    /// previous configuration and table.
    pub fn reconfigure(
        &mut self,
        edit: impl FnOnce(&mut BuilderConfig),
    ) -> Result<(), BuildError> {
        let mut candidate = self.config.clone();
        edit(&mut candidate);

        match rebuild(candidate, &mut self.rng) {
            Ok((config, table)) => {
                self.config = config;
                self.table = table;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "wave table rebuild rejected");
                Err(err)
            }
        }
    }
}

/// Run the whole pipeline on `config`, returning the normalized
/// configuration and its table.
fn rebuild<R: RngExt + ?Sized>(
    mut config: BuilderConfig,
    rng: &mut R,
) -> Result<(BuilderConfig, WaveTable), BuildError> {
    let plan = config.plan().map_err(|mut errors| errors.remove(0))?;
    config.oscillators = plan.oscillators;

    let params = config.table_params();
    let mut accumulator = vec![0i32; config.table_length];
    for oscillator in &config.oscillators {
        let wave = oscillator
            .shape
            .generate(oscillator.frequency, oscillator.amplitude, &params, rng);
        for (acc, sample) in accumulator.iter_mut().zip(wave) {
            *acc += i32::from(sample);
        }
    }

    let mut samples: Vec<i16> = accumulator
        .into_iter()
        .map(|s| s.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16)
        .collect();

    if config.loop_smoothing {
        smooth_loop(&mut samples);
    }

    let loop_distortion = loop_distortion(&samples, config.sample_max);
    let table = WaveTable {
        samples: samples.into(),
        oscillators: config.oscillators.as_slice().into(),
        loop_distortion,
        summed_amplitude: plan.summed_amplitude,
    };

    tracing::debug!(
        oscillators = ?config.oscillators,
        table_length = config.table_length,
        sample_max = config.sample_max,
        lambda_factor = config.lambda_factor,
        loop_smoothing = config.loop_smoothing,
        summed_amplitude = table.summed_amplitude,
        loop_distortion = format_args!("{:3.1}%", table.loop_distortion),
        "wave table rebuilt"
    );

    Ok((config, table))
}

/// Average the second-to-last sample toward the first and pin the last
/// sample to the first. No-op when the seam already matches.
pub fn smooth_loop(samples: &mut [i16]) {
    let len = samples.len();
    if len < 2 || samples[0] == samples[len - 1] {
        return;
    }
    let first = samples[0];
    let averaged = (f64::from(i32::from(samples[len - 2]) + i32::from(first)) / 2.0).round();
    samples[len - 2] = averaged as i16;
    samples[len - 1] = first;
}

/// `|first - last| / sample_max × 100`.
pub fn loop_distortion(samples: &[i16], sample_max: i16) -> f64 {
    match (samples.first(), samples.last()) {
        (Some(&first), Some(&last)) if sample_max > 0 => {
            f64::from((i32::from(first) - i32::from(last)).abs()) / f64::from(sample_max) * 100.0
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::WaveShape;

    fn chime() -> Vec<Oscillator> {
        vec![
            Oscillator::sine(1.0, 0.6),
            Oscillator::sine(2.76, 0.2),
            Oscillator::sine(5.40, 0.1),
            Oscillator::sine(8.93, 0.1),
        ]
    }

    #[test]
    fn single_sine_starts_at_zero_and_peaks_at_amplitude() {
        let config = BuilderConfig::new(vec![Oscillator::sine(1.0, 0.5)], 512);
        let builder = WaveBuilder::from_seed(config, 0).unwrap();
        let table = builder.wave_table();
        assert_eq!(table.as_slice()[0], 0);
        assert_eq!(table.peak(), 16384);
        assert_eq!(table.summed_amplitude(), 0.5);
    }

    #[test]
    fn two_sines_end_to_end() {
        let config = BuilderConfig::new(
            vec![Oscillator::sine(1.0, 0.6), Oscillator::sine(2.0, 0.2)],
            512,
        )
        .with_sample_max(32700);
        let builder = WaveBuilder::from_seed(config, 0).unwrap();
        let table = builder.wave_table();
        assert_eq!(table.len(), 512);
        assert_eq!(table.as_slice()[0], 0);
        assert!((table.summed_amplitude() - 0.8).abs() < 1e-12);
        assert_eq!(table.loop_distortion(), 0.0);
    }

    #[test]
    fn table_carries_normalized_oscillators() {
        let config = BuilderConfig::new(
            vec![Oscillator::sine(440.0, 0.5), Oscillator::sine(880.0, 0.25)],
            256,
        );
        let builder = WaveBuilder::from_seed(config, 0).unwrap();
        let table = builder.wave_table();
        assert_eq!(table.oscillators(), builder.oscillators());
        assert_eq!(table.oscillators()[1].frequency, 2.0);
    }

    #[test]
    fn float_view_is_scaled_to_unit_range() {
        let config = BuilderConfig::new(vec![Oscillator::new(WaveShape::Square, 1.0, 1.0)], 8)
            .with_loop_smoothing(false);
        let builder = WaveBuilder::from_seed(config, 0).unwrap();
        let floats = builder.wave_table().to_f32();
        assert_eq!(floats.len(), 8);
        assert!(floats.iter().all(|f| (-1.0..1.0).contains(f)));
        assert_eq!(floats[1], 32767.0 / 32768.0);
    }

    #[test]
    fn extreme_ratio_reports_a_saturated_minimum() {
        let config = BuilderConfig::new(
            vec![
                Oscillator::sine(1.0, 0.5),
                Oscillator::new(WaveShape::Triangle, 1e19, 0.5),
            ],
            512,
        );
        let Err(BuildError::InsufficientResolution {
            index,
            min_table_length,
            ..
        }) = WaveBuilder::from_seed(config, 0)
        else {
            panic!("expected resolution error");
        };
        assert_eq!(index, 1);
        assert_eq!(min_table_length, usize::MAX);
    }

    #[test]
    fn huge_lambda_factor_is_diagnosed_not_overflowed() {
        let config = BuilderConfig::new(vec![Oscillator::new(WaveShape::Triangle, 1.0, 0.5)], 512)
            .with_lambda_factor(1e300);
        let errors = config.diagnose();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            BuildError::InsufficientResolution {
                min_table_length: usize::MAX,
                ..
            }
        ));
    }

    #[test]
    fn chime_fits_the_budget() {
        let config = BuilderConfig::new(chime(), 512).with_sample_max(32700);
        assert!(WaveBuilder::from_seed(config, 0).is_ok());
    }

    #[test]
    fn amplitude_budget_exceeded() {
        let config = BuilderConfig::new(
            vec![Oscillator::sine(1.0, 0.6), Oscillator::sine(2.0, 0.6)],
            512,
        );
        let err = WaveBuilder::from_seed(config, 0).unwrap_err();
        assert!(matches!(err, BuildError::InvalidAmplitudeBudget { summed } if (summed - 1.2).abs() < 1e-12));
    }

    #[test]
    fn negative_amplitude_counts_against_budget() {
        let config = BuilderConfig::new(
            vec![Oscillator::sine(1.0, 0.6), Oscillator::sine(2.0, -0.6)],
            512,
        );
        assert!(matches!(
            WaveBuilder::from_seed(config, 0),
            Err(BuildError::InvalidAmplitudeBudget { .. })
        ));
    }

    #[test]
    fn triangle_overtone_needs_resolution() {
        let config = BuilderConfig::new(
            vec![
                Oscillator::sine(1.0, 0.5),
                Oscillator::new(WaveShape::Triangle, 50.0, 0.5),
            ],
            8,
        );
        let err = WaveBuilder::from_seed(config, 0).unwrap_err();
        assert_eq!(
            err,
            BuildError::InsufficientResolution {
                index: 1,
                oscillator: Oscillator::new(WaveShape::Triangle, 50.0, 0.5),
                table_length: 8,
                min_table_length: 402,
            }
        );
    }

    #[test]
    fn saw_uses_half_cycle_fraction() {
        // 8 / 2 / 3 = 1.33 → 1 sample per half cycle
        let config = BuilderConfig::new(
            vec![
                Oscillator::sine(1.0, 0.5),
                Oscillator::new(WaveShape::Saw, 3.0, 0.5),
            ],
            8,
        );
        assert!(matches!(
            config.validate(),
            Err(BuildError::InsufficientResolution { index: 1, min_table_length: 14, .. })
        ));
        // the same ratio as a sine only needs one segment per cycle
        let config = BuilderConfig::new(
            vec![Oscillator::sine(1.0, 0.5), Oscillator::sine(3.0, 0.5)],
            8,
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn lambda_factor_raises_resolution_requirement() {
        let config = BuilderConfig::new(
            vec![
                Oscillator::new(WaveShape::Square, 1.0, 0.5),
                Oscillator::new(WaveShape::Square, 4.0, 0.5),
            ],
            32,
        );
        assert!(config.validate().is_ok());
        assert!(config.clone().with_lambda_factor(2.0).validate().is_ok());
        assert!(config.with_lambda_factor(4.0).validate().is_err());
    }

    #[test]
    fn frequencies_are_normalized_on_success() {
        let config = BuilderConfig::new(
            vec![
                Oscillator::sine(440.0, 0.2),
                Oscillator::sine(880.0, 0.2),
                Oscillator::sine(220.0, 0.2),
            ],
            512,
        );
        let builder = WaveBuilder::from_seed(config, 0).unwrap();
        let ratios: Vec<f64> = builder.oscillators().iter().map(|o| o.frequency).collect();
        assert_eq!(ratios, vec![2.0, 4.0, 1.0]);
    }

    #[test]
    fn failed_reconfiguration_keeps_previous_state() {
        let config = BuilderConfig::new(vec![Oscillator::sine(1.0, 0.5)], 512);
        let mut builder = WaveBuilder::from_seed(config, 0).unwrap();
        let before_table = builder.wave_table().clone();
        let before_config = builder.config().clone();

        let err = builder
            .set_oscillators(vec![Oscillator::sine(100.0, 0.7), Oscillator::sine(300.0, 0.7)])
            .unwrap_err();
        assert!(matches!(err, BuildError::InvalidAmplitudeBudget { .. }));
        assert_eq!(builder.wave_table(), &before_table);
        assert_eq!(builder.config(), &before_config);
        assert_eq!(builder.oscillators()[0].frequency, 1.0);
    }

    #[test]
    fn setters_rebuild_with_current_values() {
        let config = BuilderConfig::new(vec![Oscillator::new(WaveShape::Square, 1.0, 0.5)], 64);
        let mut builder = WaveBuilder::from_seed(config, 0).unwrap();

        builder.set_table_length(128).unwrap();
        assert_eq!(builder.wave_table().len(), 128);

        builder.set_sample_max(1000).unwrap();
        assert_eq!(builder.wave_table().peak(), 500);
        assert_eq!(builder.wave_table().len(), 128);

        builder.set_lambda_factor(2.0).unwrap();
        // two cycles of 64 samples; smoothing only touches the last two
        let table = builder.wave_table().as_slice();
        assert_eq!(&table[..62], &table[64..126]);

        builder.set_loop_smoothing(false).unwrap();
        assert!(!builder.loop_smoothing());
    }

    #[test]
    fn reconfigure_applies_several_fields_at_once() {
        let config = BuilderConfig::new(vec![Oscillator::sine(1.0, 0.5)], 64);
        let mut builder = WaveBuilder::from_seed(config, 0).unwrap();
        builder
            .reconfigure(|c| {
                c.table_length = 256;
                c.sample_max = 2000;
            })
            .unwrap();
        assert_eq!(builder.table_length(), 256);
        assert_eq!(builder.sample_max(), 2000);
        assert_eq!(builder.wave_table().peak(), 1000);
    }

    #[test]
    fn loop_smoothing_pins_last_sample() {
        // saw ends a cycle at 0 but lambda 1.5 stops mid-ramp
        let config = BuilderConfig::new(vec![Oscillator::new(WaveShape::Saw, 1.0, 0.5)], 100)
            .with_lambda_factor(1.5);
        let mut builder = WaveBuilder::from_seed(config, 0).unwrap();
        let smoothed = builder.wave_table().as_slice().to_vec();
        assert_eq!(smoothed[99], smoothed[0]);
        assert_eq!(builder.loop_distortion(), 0.0);

        builder.set_loop_smoothing(false).unwrap();
        let raw = builder.wave_table().as_slice();
        assert_ne!(raw[99], raw[0]);
        assert!(builder.loop_distortion() > 0.0);
        assert_eq!(&raw[..98], &smoothed[..98]);
    }

    #[test]
    fn smooth_loop_averages_second_to_last() {
        let mut samples = [10, 0, 0, 31, 50];
        smooth_loop(&mut samples);
        assert_eq!(samples, [10, 0, 0, 21, 10]);

        let mut matched = [4, 1, 2, 4];
        smooth_loop(&mut matched);
        assert_eq!(matched, [4, 1, 2, 4]);
    }

    #[test]
    fn loop_distortion_percentage() {
        assert_eq!(loop_distortion(&[0, 5, 100], 1000), 10.0);
        assert_eq!(loop_distortion(&[-25, 25], 100), 50.0);
        assert_eq!(loop_distortion(&[], 100), 0.0);
    }

    #[test]
    fn preconditions_are_reported() {
        let config = BuilderConfig::new(vec![], 1)
            .with_sample_max(0)
            .with_lambda_factor(f64::NAN);
        let errors = config.diagnose();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0], BuildError::NoOscillators);
        assert_eq!(errors[1], BuildError::InvalidTableLength(1));
        assert_eq!(errors[2], BuildError::InvalidSampleMax(0));
        assert!(matches!(errors[3], BuildError::InvalidLambdaFactor(_)));
    }

    #[test]
    fn invalid_frequency_is_reported_with_index() {
        let config = BuilderConfig::new(
            vec![Oscillator::sine(1.0, 0.5), Oscillator::sine(0.0, 0.1)],
            64,
        );
        assert!(matches!(
            config.validate(),
            Err(BuildError::InvalidOscillator { index: 1, .. })
        ));
    }

    #[test]
    fn seeded_noise_is_reproducible() {
        let config = BuilderConfig::new(vec![Oscillator::new(WaveShape::Noise, 1.0, 0.5)], 256);
        let a = WaveBuilder::from_seed(config.clone(), 42).unwrap();
        let b = WaveBuilder::from_seed(config, 42).unwrap();
        assert_eq!(a.wave_table(), b.wave_table());
    }
}
