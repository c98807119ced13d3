//! Error types for wave table construction.

use thiserror::Error;

use crate::oscillator::Oscillator;

/// Reasons a rebuild is rejected.
///
/// All variants are configuration errors: nothing is retried and the
/// builder keeps its previous table when one is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuildError {
    /// The oscillator list is empty.
    #[error("at least one oscillator is required")]
    NoOscillators,

    /// An oscillator has a value that can never produce a table.
    #[error("invalid oscillator {index} ({oscillator}): {reason}")]
    InvalidOscillator {
        /// Position in the oscillator list.
        index: usize,
        /// The offending oscillator.
        oscillator: Oscillator,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Table length below the two-sample minimum.
    #[error("table_length {0} is too small; at least 2 samples are required")]
    InvalidTableLength(usize),

    /// `sample_max` outside `1..=32767`.
    #[error("sample_max {0} out of range [1, 32767]")]
    InvalidSampleMax(i16),

    /// `lambda_factor` is not a positive finite number.
    #[error("lambda_factor {0} must be a positive finite number")]
    InvalidLambdaFactor(f64),

    /// Summed absolute amplitudes exceed 1.0.
    #[error("summed amplitude of oscillators {summed:.3} exceeds 1.0")]
    InvalidAmplitudeBudget {
        /// Sum of `|amplitude|` over all oscillators.
        summed: f64,
    },

    /// An oscillator gets fewer than two samples per waveform segment.
    #[error(
        "table_length {table_length} is too small for oscillator {index} ({oscillator}); \
         increase to {min_table_length} or larger"
    )]
    InsufficientResolution {
        /// Position in the oscillator list.
        index: usize,
        /// The oscillator, with its frequency normalized to a ratio.
        oscillator: Oscillator,
        /// The rejected table length.
        table_length: usize,
        /// Suggested minimum table length.
        min_table_length: usize,
    },
}

/// Errors from parsing shapes and oscillators from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unrecognized wave shape name.
    #[error("unknown wave shape '{0}' (expected sine, square, saw, triangle or noise)")]
    UnknownShape(String),

    /// Oscillator text is not `shape:frequency:amplitude`.
    #[error("invalid oscillator '{0}' (expected shape:frequency:amplitude)")]
    Format(String),

    /// A numeric field failed to parse.
    #[error("invalid number '{0}'")]
    Number(String),
}
