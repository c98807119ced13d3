//! Preset validation.
//!
//! [`validate_preset`] reports every problem with a preset at once, rather
//! than the first one a build would hit. Builder preconditions come from
//! [`BuilderConfig::diagnose`](wavebuilder_core::BuilderConfig::diagnose);
//! the preset-level checks here add naming and per-oscillator ranges.
//!
//! # Example
//!
//! ```rust
//! use wavebuilder_config::{Preset, ValidationError, validate_preset};
//! use wavebuilder_core::Oscillator;
//!
//! let preset = Preset::new("")
//!     .with_oscillator(Oscillator::sine(1.0, 0.5));
//! assert_eq!(validate_preset(&preset), Err(ValidationError::EmptyName));
//! ```

use thiserror::Error;
use wavebuilder_core::{BuildError, Oscillator};

use crate::Preset;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The preset name is empty or whitespace.
    #[error("preset name must not be empty")]
    EmptyName,

    /// A single oscillator amplitude outside `[-1.0, 1.0]`.
    #[error("oscillator {index} amplitude {amplitude} out of range [-1, 1]")]
    AmplitudeOutOfRange {
        /// Position in the oscillator list.
        index: usize,
        /// The rejected amplitude.
        amplitude: f64,
    },

    /// The builder would reject this configuration.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check one oscillator's amplitude range.
pub fn validate_oscillator(index: usize, oscillator: &Oscillator) -> ValidationResult<()> {
    let amplitude = oscillator.amplitude;
    if amplitude.is_finite() && !(-1.0..=1.0).contains(&amplitude) {
        return Err(ValidationError::AmplitudeOutOfRange { index, amplitude });
    }
    Ok(())
}

/// Validate a complete preset, collecting every problem found.
///
/// Returns the lone error directly, or [`ValidationError::Multiple`] when
/// there is more than one.
pub fn validate_preset(preset: &Preset) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if preset.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }

    errors.extend(
        preset
            .oscillators
            .iter()
            .enumerate()
            .filter_map(|(index, osc)| validate_oscillator(index, osc).err()),
    );

    errors.extend(
        preset
            .to_builder_config()
            .diagnose()
            .into_iter()
            .map(ValidationError::Build),
    );

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
