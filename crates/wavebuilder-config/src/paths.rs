//! Where user presets live.
//!
//! User presets are stored under the platform config directory:
//! `~/.config/wavebuilder/presets/` on Linux,
//! `~/Library/Application Support/wavebuilder/presets/` on macOS and
//! `%APPDATA%\wavebuilder\presets\` on Windows. Setting
//! `WAVEBUILDER_PRESETS_DIR` replaces that location.
//!
//! ```rust,no_run
//! use wavebuilder_config::paths;
//!
//! if let Some(path) = paths::find_preset("my_pad") {
//!     println!("found {}", path.display());
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Application name used for directory paths.
const APP_NAME: &str = "wavebuilder";

const PRESETS_SUBDIR: &str = "presets";

/// Environment variable that overrides [`user_presets_dir`].
pub const PRESETS_DIR_ENV: &str = "WAVEBUILDER_PRESETS_DIR";

const PRESET_EXTENSION: &str = "toml";

/// The user presets directory. It may not exist yet.
pub fn user_presets_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(PRESETS_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(PRESETS_SUBDIR)
}

/// Create the user presets directory if needed and return it.
pub fn ensure_user_presets_dir() -> Result<PathBuf, ConfigError> {
    let dir = user_presets_dir();
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::create_dir(&dir, e))?;
        tracing::debug!(dir = %dir.display(), "created presets directory");
    }
    Ok(dir)
}

/// Path a preset named `name` would be saved to in the user directory.
pub fn user_preset_path(name: &str) -> PathBuf {
    user_presets_dir().join(with_extension(name))
}

/// Resolve a preset by name or path.
///
/// An existing file path wins; otherwise `name` (with `.toml` appended if
/// missing) is looked up in the user presets directory.
pub fn find_preset(name: &str) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Some(direct.to_path_buf());
    }
    find_preset_in(&user_presets_dir(), name)
}

/// Look up `name` inside `dir`, appending `.toml` if missing.
pub fn find_preset_in(dir: &Path, name: &str) -> Option<PathBuf> {
    let candidate = dir.join(with_extension(name));
    candidate.is_file().then_some(candidate)
}

/// Preset files in the user presets directory, sorted by path.
pub fn list_user_presets() -> Vec<PathBuf> {
    list_presets_in_dir(&user_presets_dir())
}

/// Preset files in `dir`, sorted by path. Missing directories are empty.
pub fn list_presets_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut presets: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_preset_file(path))
        .collect();
    presets.sort();
    presets
}

/// The preset name a file path implies (its stem).
pub fn preset_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}

fn is_preset_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PRESET_EXTENSION))
}

fn with_extension(name: &str) -> String {
    if is_preset_file(Path::new(name)) {
        name.to_string()
    } else {
        format!("{name}.{PRESET_EXTENSION}")
    }
}
