//! Wrapped tool invocation

use ago_core::{AgoError, Result};
use std::process::{Command, Stdio};
use tracing::debug;

/// Exit code reported when the child ended without one (killed by a signal).
pub const SIGNALED_EXIT_CODE: i32 = 1;

/// Runs the wrapped package tool in the foreground.
#[derive(Debug, Clone)]
pub struct ToolRunner {
    program: String,
}

impl ToolRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the tool with `args`, sharing this process's stdio, and wait for
    /// it to exit.
    ///
    /// Returns the child's exit code. A non-zero code is not an error; only
    /// failing to start the child is.
    pub fn run(&self, args: &[String]) -> Result<i32> {
        debug!("Running {} {:?}", self.program, args);

        let status = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| AgoError::Spawn {
                tool: self.program.clone(),
                reason: e.to_string(),
            })?;

        debug!("{} exited with {}", self.program, status);
        Ok(status.code().unwrap_or(SIGNALED_EXIT_CODE))
    }
}
