//! ago CLI Library
//!
//! Argument handling for the `ago` binary: it resolves package aliases in
//! `go get` / `go install` arguments and hands everything to the go tool.
//!
//! Alias storage and resolution live in [`ago_core`]; this crate adds the
//! command surface, layered configuration and process invocation.
//!
//! ```no_run
//! use ago::runner::ToolRunner;
//! use ago_core::{resolve_args, AliasStore};
//!
//! # fn example() -> anyhow::Result<()> {
//! let store = AliasStore::new("/home/me/.ago");
//! let aliases = store.load()?;
//!
//! let mut args = vec!["get".to_string()];
//! args.extend(resolve_args(["foo@latest"], &aliases));
//!
//! let code = ToolRunner::new("go").run(&args)?;
//! std::process::exit(code);
//! # }
//! ```

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

/// Configuration types for the CLI tool.
pub mod config;

// Internal formatting functions - not part of public API
#[doc(hidden)]
pub mod format;

/// Wrapped tool invocation.
pub mod runner;
