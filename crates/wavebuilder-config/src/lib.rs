//! Presets for wavebuilder wave tables.
//!
//! A [`Preset`] is a named, TOML-serializable recipe for a wave table: the
//! oscillator list plus table length, peak sample value, lambda factor and
//! loop smoothing. This crate loads and saves presets, validates them,
//! ships a set of factory presets and knows where user presets are kept.
//!
//! # Example
//!
//! ```rust,no_run
//! use wavebuilder_config::{Preset, get_factory_preset, paths};
//! use wavebuilder_core::{Oscillator, WaveShape};
//!
//! // Start from a factory preset and build it
//! let chime = get_factory_preset("chime").unwrap();
//! let table = chime.build().unwrap();
//! assert_eq!(table.wave_table().len(), 512);
//!
//! // Create a preset programmatically and save it for later
//! let preset = Preset::new("Reedy")
//!     .with_description("Square with a saw edge")
//!     .with_oscillator(Oscillator::new(WaveShape::Square, 1.0, 0.6))
//!     .with_oscillator(Oscillator::new(WaveShape::Saw, 2.0, 0.3));
//! preset.save(paths::user_preset_path("reedy")).unwrap();
//! ```

mod error;
mod preset;

/// Built-in presets bundled with the library.
pub mod factory_presets;

/// Platform-specific preset locations.
pub mod paths;

/// Preset validation.
pub mod validation;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset,
};
pub use paths::{
    ensure_user_presets_dir, find_preset, list_user_presets, preset_name_from_path,
    user_preset_path, user_presets_dir,
};
pub use preset::{DEFAULT_TABLE_LENGTH, Preset};
pub use validation::{ValidationError, ValidationResult, validate_oscillator, validate_preset};

/// Resolve a preset by factory name first, then an existing file path,
/// then a user preset name.
pub fn load_preset(name: &str) -> Result<Preset, ConfigError> {
    if let Some(preset) = get_factory_preset(name) {
        return Ok(preset);
    }
    match find_preset(name) {
        Some(path) => Preset::load(path),
        None => Err(ConfigError::PresetNotFound(name.to_string())),
    }
}
