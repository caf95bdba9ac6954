//! XDG Base Directory paths for hookshelf.
//!
//! The CLI keeps its user-level configuration under XDG paths on every
//! platform rather than the platform-native locations.

use std::path::PathBuf;

/// File name of the user-level configuration inside [`config_dir`].
pub const USER_CONFIG_FILE: &str = "config.toml";

/// Get the hookshelf config directory.
///
/// Returns `$XDG_CONFIG_HOME/hookshelf` if set, otherwise `~/.config/hookshelf`.
///
/// # Examples
///
/// ```
/// use hookshelf_paths::config_dir;
///
/// let config = config_dir();
/// assert!(config.ends_with("hookshelf"));
/// ```
pub fn config_dir() -> PathBuf {
    if let Some(xdg_config) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        PathBuf::from(xdg_config).join("hookshelf")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config/hookshelf")
    } else {
        PathBuf::from(".config/hookshelf")
    }
}

/// Path of the user-level config file.
pub fn user_config_path() -> PathBuf {
    config_dir().join(USER_CONFIG_FILE)
}
