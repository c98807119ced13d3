//! WAV file reading and writing.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;
use wavebuilder_core::WaveTable;

/// Bit depth of every file this module writes.
const BITS_PER_SAMPLE: u16 = 16;

/// How a table is laid out in a WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavExport {
    /// Sample rate written to the header, in Hz.
    pub sample_rate: u32,
    /// Times the table is repeated back to back.
    pub cycles: usize,
}

impl Default for WavExport {
    fn default() -> Self {
        Self {
            sample_rate: 48000,
            cycles: 1,
        }
    }
}

impl WavExport {
    fn hound_spec(self) -> hound::WavSpec {
        hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
            sample_format: SampleFormat::Int,
        }
    }
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone, PartialEq)]
pub struct WavInfo {
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let num_frames = u64::from(reader.len()) / u64::from(spec.channels.max(1));

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
    })
}

/// Write a table as 16-bit mono PCM, repeated `export.cycles` times.
///
/// Samples are written verbatim; no resampling or dithering happens.
pub fn write_wav<P: AsRef<Path>>(path: P, table: &WaveTable, export: WavExport) -> Result<()> {
    if export.cycles == 0 {
        return Err(Error::InvalidExport("cycles must be at least 1".into()));
    }
    if export.sample_rate == 0 {
        return Err(Error::InvalidExport("sample rate must be positive".into()));
    }

    let path = path.as_ref();
    let mut writer = WavWriter::create(path, export.hound_spec())?;
    for _ in 0..export.cycles {
        for &sample in table.as_slice() {
            writer.write_sample(sample)?;
        }
    }
    writer.finalize()?;

    tracing::debug!(
        path = %path.display(),
        samples = table.len() * export.cycles,
        sample_rate = export.sample_rate,
        "wrote wave table"
    );
    Ok(())
}

/// Read the samples of a 16-bit mono PCM file.
///
/// Files with any other layout are rejected with
/// [`Error::UnsupportedFormat`] rather than converted.
pub fn read_wav_table<P: AsRef<Path>>(path: P) -> Result<Vec<i16>> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels != 1 {
        return Err(Error::UnsupportedFormat(format!(
            "{} channels, expected mono",
            spec.channels
        )));
    }
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != BITS_PER_SAMPLE {
        return Err(Error::UnsupportedFormat(format!(
            "{}-bit {:?}, expected 16-bit integer PCM",
            spec.bits_per_sample, spec.sample_format
        )));
    }

    Ok(reader
        .into_samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()?)
}
