//! Where configuration lives on disk, and how it is read and written.
//!
//! Config files are looked up in this order, first match wins:
//!
//! 1. `./tracker.json5`, then `./tracker.json`
//! 2. `<config dir>/tracker/config.json5`, then `config.json` in the same
//!    directory (`~/.config/tracker/` on Linux)
//!
//! Both extensions are parsed with the JSON5 reader; files are always
//! written back as plain pretty-printed JSON, which JSON5 accepts.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Directory name used under the platform config and data directories.
const APP_DIR: &str = "tracker";

/// File names checked in the working directory.
const LOCAL_FILE_NAMES: [&str; 2] = ["tracker.json5", "tracker.json"];

/// File names checked in the per-user config directory.
const USER_FILE_NAMES: [&str; 2] = ["config.json5", "config.json"];

/// Finds the config file to load, if any.
///
/// ```no_run
/// use tracker_config::persistence::find_config_file;
///
/// match find_config_file() {
///     Some(path) => println!("using {}", path.display()),
///     None => println!("using defaults"),
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Same as [`find_config_file`] with explicit search roots.
///
/// `config_dir` is the platform config directory; the `tracker`
/// subdirectory is appended here.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, config_dir: Option<&Path>) -> Option<PathBuf> {
    let user_dir = config_dir.map(|dir| dir.join(APP_DIR));

    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|candidate| candidate.is_file())
}

/// Returns the default directory for card data and logs.
///
/// This is `~/.local/share/tracker/` on Linux.
///
/// # Errors
///
/// Returns [`ConfigError::NoDataDirectory`] if the platform has no data
/// directory for the current user.
pub fn default_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().ok_or(ConfigError::NoDataDirectory)?;
    Ok(base.join(APP_DIR))
}

/// Reads `path` and deserializes it as JSON5.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if its content does not match `T`.
///
/// ```no_run
/// use tracker_config::Config;
/// use tracker_config::persistence::read_config_file;
///
/// # fn main() -> tracker_config::Result<()> {
/// let config: Config = read_config_file("tracker.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&text)?)
}

/// Serializes `value` as pretty JSON and writes it to `path`.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns [`ConfigError::SerializeJson`] if `value` cannot be serialized
/// and [`ConfigError::WriteFile`] if the directory or file cannot be
/// written.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(value)?;

    let write_error = |source: std::io::Error| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, text).map_err(write_error)
}
