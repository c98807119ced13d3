//! Built-in oscillator sets.
//!
//! Factory presets are embedded TOML, parsed on demand, and always
//! available without touching the filesystem. Each one is a known-good
//! starting point: it validates and builds with its own table parameters.

use crate::Preset;

/// Identifiers of every factory preset, in listing order.
pub static FACTORY_PRESET_NAMES: &[&str] = &[
    "sine", "square", "saw", "triangle", "noise", "chime", "organ", "hollow",
];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("sine", SINE_PRESET),
    ("square", SQUARE_PRESET),
    ("saw", SAW_PRESET),
    ("triangle", TRIANGLE_PRESET),
    ("noise", NOISE_PRESET),
    ("chime", CHIME_PRESET),
    ("organ", ORGAN_PRESET),
    ("hollow", HOLLOW_PRESET),
];

const SINE_PRESET: &str = r#"
name = "Sine"
description = "Single full-scale sine"
table_length = 512

[[oscillators]]
shape = "sine"
frequency = 1.0
amplitude = 1.0
"#;

const SQUARE_PRESET: &str = r#"
name = "Square"
description = "Single square at 80% of full scale"
table_length = 512

[[oscillators]]
shape = "square"
frequency = 1.0
amplitude = 0.8
"#;

const SAW_PRESET: &str = r#"
name = "Saw"
description = "Single saw at 80% of full scale"
table_length = 512

[[oscillators]]
shape = "saw"
frequency = 1.0
amplitude = 0.8
"#;

const TRIANGLE_PRESET: &str = r#"
name = "Triangle"
description = "Single triangle at 80% of full scale"
table_length = 512

[[oscillators]]
shape = "triangle"
frequency = 1.0
amplitude = 0.8
"#;

const NOISE_PRESET: &str = r#"
name = "Noise"
description = "Uniform white noise, redrawn on every build"
table_length = 1024

[[oscillators]]
shape = "noise"
frequency = 1.0
amplitude = 0.5
"#;

const CHIME_PRESET: &str = r#"
name = "Chime"
description = "Inharmonic bell partials over a sine fundamental"
table_length = 512
sample_max = 32700

[[oscillators]]
shape = "sine"
frequency = 1.0
amplitude = 0.6

[[oscillators]]
shape = "sine"
frequency = 2.76
amplitude = 0.2

[[oscillators]]
shape = "sine"
frequency = 5.40
amplitude = 0.1

[[oscillators]]
shape = "sine"
frequency = 8.93
amplitude = 0.1
"#;

const ORGAN_PRESET: &str = r#"
name = "Organ"
description = "Drawbar-style harmonic stack"
table_length = 1024
sample_max = 32000

[[oscillators]]
shape = "sine"
frequency = 1.0
amplitude = 0.4

[[oscillators]]
shape = "sine"
frequency = 2.0
amplitude = 0.25

[[oscillators]]
shape = "sine"
frequency = 3.0
amplitude = 0.15

[[oscillators]]
shape = "sine"
frequency = 4.0
amplitude = 0.1

[[oscillators]]
shape = "sine"
frequency = 8.0
amplitude = 0.1
"#;

const HOLLOW_PRESET: &str = r#"
name = "Hollow"
description = "Square fundamental with odd triangle and saw overtones"
table_length = 1024

[[oscillators]]
shape = "square"
frequency = 1.0
amplitude = 0.5

[[oscillators]]
shape = "triangle"
frequency = 3.0
amplitude = 0.25

[[oscillators]]
shape = "saw"
frequency = 5.0
amplitude = 0.15
"#;

/// All factory presets, in listing order.
///
/// # Example
///
/// ```rust
/// use wavebuilder_config::factory_presets;
///
/// for preset in factory_presets() {
///     println!("{}: {} oscillators", preset.name, preset.oscillators.len());
/// }
/// ```
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Look up a factory preset by identifier or display name, ignoring case.
///
/// ```rust
/// use wavebuilder_config::get_factory_preset;
///
/// let chime = get_factory_preset("Chime").unwrap();
/// assert_eq!(chime.oscillators.len(), 4);
/// ```
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    let by_id = FACTORY_PRESETS_TOML
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(name))
        .and_then(|(_, toml)| Preset::from_toml(toml).ok());

    by_id.or_else(|| {
        factory_presets()
            .into_iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    })
}

/// Identifiers of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESET_NAMES.to_vec()
}

/// Whether `name` refers to a factory preset (case-insensitive).
///
/// ```rust
/// use wavebuilder_config::is_factory_preset;
///
/// assert!(is_factory_preset("organ"));
/// assert!(is_factory_preset("ORGAN"));
/// assert!(!is_factory_preset("my_pad"));
/// ```
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}
