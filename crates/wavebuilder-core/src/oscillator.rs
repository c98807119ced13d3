//! Oscillator descriptions and ratio normalization.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::shape::WaveShape;

/// One additive component of a composite wave table.
///
/// `frequency` is either an absolute frequency (Hz) or an overtone ratio;
/// only its value relative to the lowest frequency in the set matters.
/// After a successful build the builder stores ratios, with the
/// fundamental at exactly `1.0`.
///
/// `amplitude` is in `[-1.0, 1.0]`. A negative amplitude flips the phase
/// by 180° but its magnitude still counts against the amplitude budget.
///
/// # Example
///
/// ```rust
/// use wavebuilder_core::{Oscillator, WaveShape};
///
/// let osc: Oscillator = "saw:2.0:0.25".parse().unwrap();
/// assert_eq!(osc, Oscillator::new(WaveShape::Saw, 2.0, 0.25));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    /// Wave shape.
    pub shape: WaveShape,
    /// Frequency in Hz or overtone ratio.
    #[serde(alias = "ratio")]
    pub frequency: f64,
    /// Peak amplitude as a fraction of `sample_max`.
    pub amplitude: f64,
}

impl Oscillator {
    /// Create an oscillator.
    pub const fn new(shape: WaveShape, frequency: f64, amplitude: f64) -> Self {
        Self {
            shape,
            frequency,
            amplitude,
        }
    }

    /// Shorthand for a sine oscillator.
    pub const fn sine(frequency: f64, amplitude: f64) -> Self {
        Self::new(WaveShape::Sine, frequency, amplitude)
    }

    /// Returns the reason this oscillator can never be built, if any.
    pub(crate) fn defect(&self) -> Option<&'static str> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            Some("frequency must be a positive finite number")
        } else if !self.amplitude.is_finite() {
            Some("amplitude must be finite")
        } else {
            None
        }
    }
}

impl fmt::Display for Oscillator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.shape, self.frequency, self.amplitude)
    }
}

impl FromStr for Oscillator {
    type Err = ParseError;

    /// Parse `shape:frequency:amplitude`, e.g. `sine:440:0.5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [shape, frequency, amplitude] = parts.as_slice() else {
            return Err(ParseError::Format(s.to_string()));
        };

        let shape = shape.parse()?;
        let frequency = frequency
            .trim()
            .parse()
            .map_err(|_| ParseError::Number(frequency.to_string()))?;
        let amplitude = amplitude
            .trim()
            .parse()
            .map_err(|_| ParseError::Number(amplitude.to_string()))?;

        Ok(Self::new(shape, frequency, amplitude))
    }
}

/// Rewrite every frequency as a ratio of the lowest one.
///
/// The oscillator holding the minimum value ends up at exactly `1.0`.
/// Returns an empty vector for an empty input.
pub fn normalize_ratios(oscillators: &[Oscillator]) -> Vec<Oscillator> {
    let fundamental = oscillators
        .iter()
        .map(|osc| osc.frequency)
        .fold(f64::INFINITY, f64::min);

    oscillators
        .iter()
        .map(|osc| Oscillator {
            frequency: osc.frequency / fundamental,
            ..*osc
        })
        .collect()
}

/// Sum of absolute amplitudes.
pub fn summed_amplitude(oscillators: &[Oscillator]) -> f64 {
    oscillators.iter().map(|osc| osc.amplitude.abs()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_lowest_frequency() {
        let oscillators = [
            Oscillator::sine(440.0, 0.2),
            Oscillator::sine(880.0, 0.2),
            Oscillator::sine(220.0, 0.2),
        ];
        let ratios: Vec<f64> = normalize_ratios(&oscillators)
            .iter()
            .map(|osc| osc.frequency)
            .collect();
        assert_eq!(ratios, vec![2.0, 4.0, 1.0]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_ratios(&[Oscillator::sine(3.0, 0.5), Oscillator::sine(9.0, 0.5)]);
        let twice = normalize_ratios(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn normalization_keeps_shape_and_amplitude() {
        let osc = Oscillator::new(WaveShape::Triangle, 100.0, -0.4);
        let normalized = normalize_ratios(&[osc]);
        assert_eq!(normalized[0], Oscillator::new(WaveShape::Triangle, 1.0, -0.4));
    }

    #[test]
    fn negative_amplitude_counts_against_budget() {
        let oscillators = [Oscillator::sine(1.0, 0.5), Oscillator::sine(2.0, -0.25)];
        assert_eq!(summed_amplitude(&oscillators), 0.75);
    }

    #[test]
    fn parse_oscillator() {
        let osc: Oscillator = "Square:880:-0.5".parse().unwrap();
        assert_eq!(osc, Oscillator::new(WaveShape::Square, 880.0, -0.5));
    }

    #[test]
    fn parse_rejects_missing_fields() {
        assert_eq!(
            "sine:1.0".parse::<Oscillator>().unwrap_err(),
            ParseError::Format("sine:1.0".to_string())
        );
    }

    #[test]
    fn parse_rejects_bad_number() {
        assert_eq!(
            "sine:abc:0.5".parse::<Oscillator>().unwrap_err(),
            ParseError::Number("abc".to_string())
        );
    }

    #[test]
    fn defects() {
        assert!(Oscillator::sine(0.0, 0.5).defect().is_some());
        assert!(Oscillator::sine(-1.0, 0.5).defect().is_some());
        assert!(Oscillator::sine(f64::NAN, 0.5).defect().is_some());
        assert!(Oscillator::sine(1.0, f64::INFINITY).defect().is_some());
        assert!(Oscillator::sine(1.0, -0.5).defect().is_none());
    }
}
