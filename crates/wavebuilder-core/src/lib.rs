//! WaveBuilder Core - composite wave table construction
//!
//! This crate builds a single-cycle wave table of signed 16-bit samples by
//! additively combining oscillators. The table is meant to be looped by an
//! external fixed-sample-rate synthesizer as one period of a periodic
//! waveform.
//!
//! # Core Components
//!
//! ## Oscillators
//!
//! - [`Oscillator`] - wave shape, frequency (or overtone ratio) and amplitude
//! - [`WaveShape`] - Sine, Square, Saw, Triangle, Noise
//!
//! Frequencies are normalized against the lowest one, so `440, 880, 1320`
//! and `1.0, 2.0, 3.0` describe the same table.
//!
//! ## Building
//!
//! - [`BuilderConfig`] - oscillators plus table length, peak sample value,
//!   lambda factor and loop smoothing
//! - [`WaveBuilder`] - validates, renders and owns the current [`WaveTable`]
//! - [`SharedWaveBuilder`] - lock-protected handle for multi-threaded use
//!
//! ```rust
//! use wavebuilder_core::{BuilderConfig, Oscillator, WaveBuilder, WaveShape};
//!
//! let chime = vec![
//!     Oscillator::sine(1.0, 0.6),
//!     Oscillator::sine(2.76, 0.2),
//!     Oscillator::sine(5.40, 0.1),
//!     Oscillator::sine(8.93, 0.1),
//! ];
//! let config = BuilderConfig::new(chime, 512).with_sample_max(32700);
//! let mut wave = WaveBuilder::new(config).unwrap();
//!
//! assert_eq!(wave.wave_table().len(), 512);
//! assert_eq!(wave.loop_distortion(), 0.0);
//!
//! // Every setter rebuilds the whole table.
//! wave.set_oscillators(vec![Oscillator::new(WaveShape::Saw, 1.0, 0.6)]).unwrap();
//! ```
//!
//! # Validation
//!
//! A rebuild is rejected with a [`BuildError`] when the summed absolute
//! amplitude exceeds 1.0 or when any oscillator would get fewer than two
//! samples per waveform segment. A rejected rebuild leaves the builder's
//! configuration and table exactly as they were.
//!
//! # Diagnostics
//!
//! Each successful rebuild emits a `tracing` debug event carrying the full
//! configuration, the summed amplitude and the loop distortion.

pub mod builder;
pub mod error;
pub mod generator;
pub mod oscillator;
pub mod shape;
pub mod shared;

pub use builder::{
    AMPLITUDE_BUDGET_EPSILON, BuilderConfig, DEFAULT_LAMBDA_FACTOR, DEFAULT_SAMPLE_MAX, WaveBuilder,
    WaveTable, loop_distortion, smooth_loop,
};
pub use error::{BuildError, ParseError};
pub use generator::TableParams;
pub use oscillator::{Oscillator, normalize_ratios, summed_amplitude};
pub use shape::WaveShape;
pub use shared::SharedWaveBuilder;

/// Re-exported so callers can inject their own noise source.
pub use rand;
