//! Configuration types for ago
//!
//! - [`AliasData`] - package aliases, mutable via the `alias` command
//! - path helpers locating the configuration directory and its files
//!
//! The alias mapping is persisted as JSON within the configuration directory.

mod aliases;
mod paths;

pub use aliases::{validate_alias, AliasData};
pub use paths::{
    aliases_path, config_dir_from_env, config_file_path, default_config_dir, ALIASES_FILE,
    CONFIG_DIR_ENV, CONFIG_FILE,
};
