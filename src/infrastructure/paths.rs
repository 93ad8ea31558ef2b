//! Filesystem locations for traces, configuration and snapshots.
//!
//! Follows the XDG base directory layout, falling back to `$HOME/.local/share`
//! and `$HOME/.config` when the XDG variables are unset or empty.

use std::path::PathBuf;

const APP_DIR: &str = "showfinder";

fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var).filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn home() -> PathBuf {
    env_dir("HOME").unwrap_or_else(|| PathBuf::from("."))
}

/// Directory holding the trace file.
///
/// `$XDG_DATA_HOME/showfinder`, or `~/.local/share/showfinder`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    env_dir("XDG_DATA_HOME")
        .unwrap_or_else(|| home().join(".local").join("share"))
        .join(APP_DIR)
}

/// Default configuration file, read when `--config` is not given.
///
/// `$XDG_CONFIG_HOME/showfinder/config.toml`, or `~/.config/showfinder/config.toml`.
#[must_use]
pub fn default_config_file() -> PathBuf {
    env_dir("XDG_CONFIG_HOME")
        .unwrap_or_else(|| home().join(".config"))
        .join(APP_DIR)
        .join("config.toml")
}

/// Expands a leading `~` to the home directory.
///
/// ```
/// use showfinder::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/~"), "relative/~");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let home = || home().to_string_lossy().into_owned();
    if path == "~" {
        home()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home())
    } else {
        path.to_string()
    }
}
