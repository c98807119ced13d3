//! Thread-safe builder handle.
//!
//! A [`SharedWaveBuilder`] serializes reconfiguration behind a single
//! lock held for the whole rebuild. Readers take a [`WaveTable`]
//! snapshot, so they observe either the table from before a rebuild or
//! the one after it, never a mix.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::RngExt;
use rand::rngs::StdRng;

use crate::builder::{BuilderConfig, WaveBuilder, WaveTable};
use crate::error::BuildError;
use crate::oscillator::Oscillator;

/// Cloneable, lock-protected [`WaveBuilder`].
///
/// # Example
///
/// ```rust
/// use wavebuilder_core::{BuilderConfig, Oscillator, SharedWaveBuilder, WaveBuilder};
///
/// let builder = WaveBuilder::new(BuilderConfig::new(vec![Oscillator::sine(1.0, 0.5)], 128)).unwrap();
/// let shared = SharedWaveBuilder::new(builder);
///
/// let reader = shared.clone();
/// std::thread::spawn(move || reader.wave_table().len()).join().unwrap();
///
/// shared.set_table_length(256).unwrap();
/// assert_eq!(shared.wave_table().len(), 256);
/// ```
#[derive(Debug)]
pub struct SharedWaveBuilder<R = StdRng> {
    inner: Arc<Mutex<WaveBuilder<R>>>,
}

impl<R> Clone for SharedWaveBuilder<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: RngExt> SharedWaveBuilder<R> {
    /// Wrap an existing builder.
    pub fn new(builder: WaveBuilder<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(builder)),
        }
    }

    /// Snapshot of the current table.
    pub fn wave_table(&self) -> WaveTable {
        self.inner.lock().wave_table().clone()
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> BuilderConfig {
        self.inner.lock().config().clone()
    }

    /// Replace the oscillator list and rebuild.
    pub fn set_oscillators(&self, oscillators: Vec<Oscillator>) -> Result<(), BuildError> {
        self.inner.lock().set_oscillators(oscillators)
    }

    /// Change the table length and rebuild.
    pub fn set_table_length(&self, table_length: usize) -> Result<(), BuildError> {
        self.inner.lock().set_table_length(table_length)
    }

    /// Change the peak sample magnitude and rebuild.
    pub fn set_sample_max(&self, sample_max: i16) -> Result<(), BuildError> {
        self.inner.lock().set_sample_max(sample_max)
    }

    /// Change the lambda factor and rebuild.
    pub fn set_lambda_factor(&self, lambda_factor: f64) -> Result<(), BuildError> {
        self.inner.lock().set_lambda_factor(lambda_factor)
    }

    /// Enable or disable loop smoothing and rebuild.
    pub fn set_loop_smoothing(&self, loop_smoothing: bool) -> Result<(), BuildError> {
        self.inner.lock().set_loop_smoothing(loop_smoothing)
    }

    /// Edit several fields under one lock and rebuild once.
    pub fn reconfigure(&self, edit: impl FnOnce(&mut BuilderConfig)) -> Result<(), BuildError> {
        self.inner.lock().reconfigure(edit)
    }
}
