//! Export and import for wavebuilder wave tables.
//!
//! This crate provides:
//!
//! - **WAV files**: [`write_wav`] renders a table as 16-bit mono PCM, one or
//!   more cycles long; [`read_wav_table`] reads such a file back
//! - **Source export**: [`render_rust_source`] emits a `static` array ready to
//!   paste into firmware or a synth crate
//! - **CSV export**: [`render_csv`] for plotting and spreadsheets
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wavebuilder_core::{BuilderConfig, Oscillator, WaveBuilder};
//! use wavebuilder_io::{WavExport, render_rust_source, write_wav};
//!
//! let config = BuilderConfig::new(vec![Oscillator::sine(1.0, 0.8)], 512);
//! let builder = WaveBuilder::new(config).unwrap();
//!
//! write_wav("sine.wav", builder.wave_table(), WavExport::default()).unwrap();
//! let source = render_rust_source("sine", builder.wave_table());
//! assert!(source.contains("pub static SINE: [i16; 512]"));
//! ```

mod export;
mod wav;

pub use export::{render_csv, render_rust_source};
pub use wav::{WavExport, WavInfo, read_wav_info, read_wav_table, write_wav};

/// Error types for wave table I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The file is not a table this crate can read back.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Export parameters that cannot produce a file.
    #[error("Invalid export settings: {0}")]
    InvalidExport(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for wave table I/O.
pub type Result<T> = std::result::Result<T, Error>;
