//! ago Core Library
//!
//! Alias storage and the resolution engine behind the `ago` wrapper.
//! The binary crate handles argument parsing and process invocation; this
//! crate is pure data access and string rewriting.

pub mod config;
pub mod error;
pub mod resolve;
pub mod store;

// Re-export commonly used types
pub use config::{default_config_dir, validate_alias, AliasData};
pub use error::*;
pub use resolve::{resolve, resolve_args};
pub use store::AliasStore;
