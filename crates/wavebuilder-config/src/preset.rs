//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;
use wavebuilder_core::{
    BuilderConfig, DEFAULT_LAMBDA_FACTOR, DEFAULT_SAMPLE_MAX, Oscillator, WaveBuilder,
};

use crate::error::ConfigError;

/// Table length used when a preset file does not name one.
pub const DEFAULT_TABLE_LENGTH: usize = 512;

/// A named, serializable wave table recipe.
///
/// Presets are TOML files holding the table parameters followed by one
/// `[[oscillators]]` entry per oscillator. Frequencies may be absolute
/// (Hz) or overtone ratios; they are normalized when the table is built.
///
/// # TOML Format
///
/// ```toml
/// name = "Chime"
/// description = "Inharmonic bell partials"
/// table_length = 512
/// sample_max = 32700
///
/// [[oscillators]]
/// shape = "sine"
/// frequency = 1.0
/// amplitude = 0.6
///
/// [[oscillators]]
/// shape = "sine"
/// ratio = 2.76
/// amplitude = 0.2
/// ```
///
/// Omitted `sample_max`, `lambda_factor` and `loop_smoothing` take the
/// builder defaults. An optional `seed` makes noise oscillators
/// reproducible.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Samples in the generated table.
    #[serde(default = "default_table_length")]
    pub table_length: usize,

    /// Peak sample magnitude for amplitude 1.0.
    #[serde(default = "default_sample_max")]
    pub sample_max: i16,

    /// Fundamental wavelengths across the table.
    #[serde(default = "default_lambda_factor")]
    pub lambda_factor: f64,

    /// Whether the last sample is forced to equal the first.
    #[serde(default = "default_loop_smoothing")]
    pub loop_smoothing: bool,

    /// Noise seed. Unseeded presets draw fresh noise on every build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Oscillators to sum.
    #[serde(default)]
    pub oscillators: Vec<Oscillator>,
}

fn default_table_length() -> usize {
    DEFAULT_TABLE_LENGTH
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

impl Preset {
    /// Create a preset with no oscillators and default table parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            table_length: DEFAULT_TABLE_LENGTH,
            sample_max: DEFAULT_SAMPLE_MAX,
            lambda_factor: DEFAULT_LAMBDA_FACTOR,
            loop_smoothing: true,
            seed: None,
            oscillators: Vec::new(),
        }
    }

    /// Capture a builder configuration under a name.
    pub fn from_builder_config(name: impl Into<String>, config: &BuilderConfig) -> Self {
        Self {
            table_length: config.table_length,
            sample_max: config.sample_max,
            lambda_factor: config.lambda_factor,
            loop_smoothing: config.loop_smoothing,
            oscillators: config.oscillators.clone(),
            ..Self::new(name)
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the table length.
    pub fn with_table_length(mut self, table_length: usize) -> Self {
        self.table_length = table_length;
        self
    }

    /// Set the noise seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Append an oscillator.
    pub fn with_oscillator(mut self, oscillator: Oscillator) -> Self {
        self.oscillators.push(oscillator);
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset = Self::from_toml(&contents)?;
        tracing::debug!(path = %path.display(), name = %preset.name, "loaded preset");
        Ok(preset)
    }

    /// Parse a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset as TOML, creating the parent directory if needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let contents = self.to_toml()?;
        std::fs::write(path, contents).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::debug!(path = %path.display(), name = %self.name, "saved preset");
        Ok(())
    }

    /// Serialize the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The builder configuration this preset describes.
    pub fn to_builder_config(&self) -> BuilderConfig {
        BuilderConfig::new(self.oscillators.clone(), self.table_length)
            .with_sample_max(self.sample_max)
            .with_lambda_factor(self.lambda_factor)
            .with_loop_smoothing(self.loop_smoothing)
    }

    /// Build the wave table, seeding noise from [`Preset::seed`] when set.
    pub fn build(&self) -> Result<WaveBuilder, ConfigError> {
        let config = self.to_builder_config();
        let builder = match self.seed {
            Some(seed) => WaveBuilder::from_seed(config, seed)?,
            None => WaveBuilder::new(config)?,
        };
        Ok(builder)
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
