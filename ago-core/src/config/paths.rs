//! Default path resolution for the alias store
//!
//! The base directory can be overridden with `AGO_CONFIG_DIR`; otherwise it
//! lives in the user's home directory.

use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "AGO_CONFIG_DIR";

/// File name of the persisted alias mapping.
pub const ALIASES_FILE: &str = "aliases.json";

/// File name of the optional CLI settings file.
pub const CONFIG_FILE: &str = "config.toml";

/// Returns the default configuration directory, `~/.ago`.
///
/// `None` when the home directory cannot be determined.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ago"))
}

/// Returns the directory named by `AGO_CONFIG_DIR`, ignoring an empty value.
pub fn config_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_DIR_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Path of the alias file inside `config_dir`.
pub fn aliases_path(config_dir: &Path) -> PathBuf {
    config_dir.join(ALIASES_FILE)
}

/// Path of the settings file inside `config_dir`.
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE)
}
