//! Wave shapes available to an oscillator.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Oscillator wave shape.
///
/// The set is closed: every shape knows how to render itself
/// ([`WaveShape::generate`]) and how much of a cycle it repeats when it
/// is built from segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveShape {
    /// Sine waveform, computed in closed form over the whole table.
    #[default]
    Sine,
    /// Square waveform built from zero-bounded plateaus.
    Square,
    /// Sawtooth waveform built from two linear ramps per cycle.
    Saw,
    /// Triangle waveform built from four linear ramps per cycle.
    Triangle,
    /// Uniform white noise, not band-limited.
    Noise,
}

impl WaveShape {
    /// All shapes, in declaration order.
    pub const ALL: [WaveShape; 5] = [
        WaveShape::Sine,
        WaveShape::Square,
        WaveShape::Saw,
        WaveShape::Triangle,
        WaveShape::Noise,
    ];

    /// Number of segments one cycle of this shape is split into.
    ///
    /// 1 for sine and noise, 2 for square and saw (half cycles),
    /// 4 for triangle (quarter cycles).
    pub const fn shape_fraction(self) -> u32 {
        match self {
            WaveShape::Sine | WaveShape::Noise => 1,
            WaveShape::Square | WaveShape::Saw => 2,
            WaveShape::Triangle => 4,
        }
    }

    /// Lowercase name, as used in presets and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            WaveShape::Sine => "sine",
            WaveShape::Square => "square",
            WaveShape::Saw => "saw",
            WaveShape::Triangle => "triangle",
            WaveShape::Noise => "noise",
        }
    }
}

impl fmt::Display for WaveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveShape {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        WaveShape::ALL
            .into_iter()
            .find(|shape| shape.name() == lower)
            .ok_or_else(|| ParseError::UnknownShape(s.to_string()))
    }
}
