//! CLI command definitions and handlers
//!
//! This module organizes the CLI into logical submodules:
//! - [`commands`] - Command and subcommand enum definitions
//! - [`handlers`] - Command execution handlers
//! - [`usage`] - Static usage text

mod commands;
mod handlers;
mod usage;

pub use commands::*;
pub use handlers::*;
pub use usage::{AGO_USAGE, ALIAS_USAGE};
