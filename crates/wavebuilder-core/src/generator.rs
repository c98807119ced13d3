//! Per-shape waveform generators.
//!
//! Every generator renders exactly `table_length` samples for one
//! oscillator. Sine is computed in closed form; square, saw and triangle
//! repeat a one-cycle unit built from integer-resolution segments and
//! truncate the repetition to the table length; noise draws uniform
//! integers from the injected generator.

use core::f64::consts::TAU;

use rand::RngExt;

use crate::shape::WaveShape;

/// Table-wide parameters shared by every oscillator in a build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableParams {
    /// Number of samples in the output table.
    pub table_length: usize,
    /// Peak magnitude for amplitude 1.0.
    pub sample_max: i16,
    /// Fundamental wavelengths represented across the table.
    pub lambda_factor: f64,
}

impl TableParams {
    /// Samples in one segment (a full, half or quarter cycle) of `shape`
    /// at the given ratio, rounded down.
    pub fn segment_len(&self, shape: WaveShape, ratio: f64) -> usize {
        let fraction = f64::from(shape.shape_fraction());
        (self.table_length as f64 / (self.lambda_factor * fraction) / ratio).floor() as usize
    }

    /// Smallest table length suggested for `shape` at `ratio`.
    pub fn min_table_length(&self, shape: WaveShape, ratio: f64) -> usize {
        let fraction = f64::from(shape.shape_fraction());
        let segments = (self.lambda_factor * fraction * ratio).floor() as usize;
        segments.saturating_mul(2).saturating_add(2)
    }

    /// Integer peak for an oscillator amplitude; negative flips phase.
    pub fn amp_factor(&self, amplitude: f64) -> i32 {
        let max = i32::from(self.sample_max);
        ((f64::from(max) * amplitude).round() as i32).min(max)
    }
}

impl WaveShape {
    /// Render `table_length` samples of this shape.
    ///
    /// `ratio` is the oscillator frequency relative to the fundamental.
    /// Only [`WaveShape::Noise`] draws from `rng`.
    pub fn generate<R: RngExt + ?Sized>(
        self,
        ratio: f64,
        amplitude: f64,
        params: &TableParams,
        rng: &mut R,
    ) -> Vec<i16> {
        let amp = params.amp_factor(amplitude);
        match self {
            WaveShape::Sine => sine_wave(ratio, amp, params),
            WaveShape::Square => {
                let half = params.segment_len(self, ratio);
                repeat_cycle(&square_cycle(half, amp), params.table_length)
            }
            WaveShape::Saw => {
                let half = params.segment_len(self, ratio);
                repeat_cycle(&saw_cycle(half, amp), params.table_length)
            }
            WaveShape::Triangle => {
                let quarter = params.segment_len(self, ratio);
                repeat_cycle(&triangle_cycle(quarter, amp), params.table_length)
            }
            WaveShape::Noise => noise_wave(amp, params.table_length, rng),
        }
    }
}

fn sine_wave(ratio: f64, amp: i32, params: &TableParams) -> Vec<i16> {
    let n = params.table_length as f64;
    let cycles = params.lambda_factor * ratio;
    (0..params.table_length)
        .map(|i| {
            let phase = TAU * cycles * i as f64 / n;
            to_sample((phase.sin() * f64::from(amp)).round())
        })
        .collect()
}

/// Zero, positive plateau, zero, negative plateau.
fn square_cycle(half: usize, amp: i32) -> Vec<i32> {
    let plateau = half.saturating_sub(1);
    let mut cycle = Vec::with_capacity(2 * half);
    cycle.push(0);
    cycle.extend(core::iter::repeat_n(amp, plateau));
    cycle.push(0);
    cycle.extend(core::iter::repeat_n(-amp, plateau));
    cycle
}

/// Ramp 0 → amp, then −amp → 0, `half` samples each.
fn saw_cycle(half: usize, amp: i32) -> Vec<i32> {
    ramp(0, amp, half).chain(ramp(-amp, 0, half)).collect()
}

/// Four quarter-cycle ramps. Segments after the first start one step
/// away from the previous segment's end so no sample value repeats
/// across a boundary.
fn triangle_cycle(quarter: usize, amp: i32) -> Vec<i32> {
    let step = if quarter == 0 { 0 } else { amp / quarter as i32 };
    ramp(0, amp, quarter)
        .chain(ramp(amp - step, 0, quarter))
        .chain(ramp(-step, -amp, quarter))
        .chain(ramp(-amp + step, -step, quarter))
        .collect()
}

fn noise_wave<R: RngExt + ?Sized>(amp: i32, len: usize, rng: &mut R) -> Vec<i16> {
    let bound = amp.abs();
    (0..len)
        .map(|_| to_sample(f64::from(rng.random_range(-bound..=bound))))
        .collect()
}

/// `len` evenly spaced values from `start` to `end` inclusive.
fn ramp(start: i32, end: i32, len: usize) -> impl Iterator<Item = i32> {
    let span = f64::from(end - start);
    let last = len.saturating_sub(1).max(1) as f64;
    (0..len).map(move |k| start + (span * k as f64 / last).round() as i32)
}

/// Tile `cycle` to exactly `len` samples.
fn repeat_cycle(cycle: &[i32], len: usize) -> Vec<i16> {
    if cycle.is_empty() {
        return vec![0; len];
    }
    cycle
        .iter()
        .cycle()
        .take(len)
        .map(|&s| to_sample(f64::from(s)))
        .collect()
}

#[inline]
fn to_sample(value: f64) -> i16 {
    value.clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}
