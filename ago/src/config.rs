//! CLI configuration management
//!
//! Settings come from, lowest to highest priority: built-in defaults, the
//! optional `config.toml` in the configuration directory, `AGO_*` environment
//! variables, and command-line flags.

use ago_core::config::{config_dir_from_env, config_file_path, default_config_dir};
use ago_core::{AgoError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the wrapped tool.
pub const TOOL_ENV: &str = "AGO_TOOL";
/// Environment variable toggling the command echo.
pub const ECHO_ENV: &str = "AGO_ECHO";
/// Environment variable enabling verbose logging.
pub const VERBOSE_ENV: &str = "AGO_VERBOSE";
/// Environment variable selecting the listing format.
pub const FORMAT_ENV: &str = "AGO_FORMAT";

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Directory holding aliases.json and config.toml
    pub config_dir: PathBuf,

    /// Wrapped package tool
    pub tool: String,

    /// Echo the forwarded command line before running it
    pub echo: bool,

    /// Enable verbose logging
    pub verbose: bool,

    /// Output format for listings
    pub output_format: String,
}

/// Contents of `config.toml`; every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub tool: Option<String>,
    pub echo: Option<bool>,
    pub verbose: Option<bool>,
    pub output_format: Option<String>,
}

impl ConfigFile {
    /// Load `config.toml` from `config_dir`, `None` if absent.
    pub fn load(config_dir: &Path) -> Result<Option<Self>> {
        let path = config_file_path(config_dir);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            AgoError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let file = toml::from_str(&content).map_err(|e| {
            AgoError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(Some(file))
    }
}

impl CliConfig {
    pub const DEFAULT_TOOL: &'static str = "go";

    /// Create a new builder for constructing configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for CLI configuration with validation and priority chain support
///
/// Each `with_*` call overwrites earlier values, so callers apply layers from
/// lowest to highest priority: file, environment, then CLI arguments.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_dir: Option<PathBuf>,
    tool: Option<String>,
    echo: Option<bool>,
    verbose: Option<bool>,
    output_format: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the configuration directory: explicit value, then
    /// `AGO_CONFIG_DIR`, then `~/.ago`.
    pub fn with_config_dir(mut self, explicit: Option<PathBuf>) -> Result<Self> {
        self.config_dir = Some(resolve_config_dir(explicit)?);
        Ok(self)
    }

    /// Set the wrapped tool (with validation)
    pub fn with_tool(mut self, tool: impl Into<String>) -> Result<Self> {
        let tool = tool.into();
        Self::validate_tool(&tool)?;
        self.tool = Some(tool);
        Ok(self)
    }

    /// Set output format (with validation)
    pub fn with_output_format(mut self, format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        Self::validate_output_format(&format)?;
        self.output_format = Some(format);
        Ok(self)
    }

    /// Set echo flag
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = Some(echo);
        self
    }

    /// Set verbose flag
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Apply `config.toml` from the configuration directory.
    ///
    /// Must run after [`ConfigBuilder::with_config_dir`]. A missing file is
    /// not an error; an unreadable or invalid one is.
    pub fn with_config_file(mut self, load_file: bool) -> Result<Self> {
        if !load_file {
            return Ok(self);
        }

        let Some(dir) = self.config_dir.clone() else {
            return Err(AgoError::Config("Config directory not set".to_string()));
        };

        let Some(file) = ConfigFile::load(&dir)? else {
            return Ok(self);
        };

        let path = config_file_path(&dir);
        if let Some(tool) = file.tool {
            self = self
                .with_tool(tool)
                .map_err(|e| in_config_file(&path, "tool", e))?;
        }
        if let Some(format) = file.output_format {
            self = self
                .with_output_format(format)
                .map_err(|e| in_config_file(&path, "output_format", e))?;
        }
        if let Some(echo) = file.echo {
            self.echo = Some(echo);
        }
        if let Some(verbose) = file.verbose {
            self.verbose = Some(verbose);
        }

        Ok(self)
    }

    /// Apply environment variable overrides
    ///
    /// Invalid values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(tool) = std::env::var(TOOL_ENV) {
            if Self::validate_tool(&tool).is_ok() {
                self.tool = Some(tool);
            }
        }

        if let Ok(format) = std::env::var(FORMAT_ENV) {
            if Self::validate_output_format(&format).is_ok() {
                self.output_format = Some(format);
            }
        }

        if let Ok(echo) = std::env::var(ECHO_ENV) {
            if let Some(echo) = parse_bool(&echo) {
                self.echo = Some(echo);
            }
        }

        if let Ok(verbose) = std::env::var(VERBOSE_ENV) {
            if let Some(verbose) = parse_bool(&verbose) {
                self.verbose = Some(verbose);
            }
        }

        self
    }

    /// Build the final configuration with validation
    pub fn build(self) -> Result<CliConfig> {
        let config_dir = match self.config_dir {
            Some(dir) => dir,
            None => resolve_config_dir(None)?,
        };

        let tool = self
            .tool
            .unwrap_or_else(|| CliConfig::DEFAULT_TOOL.to_string());
        let output_format = self.output_format.unwrap_or_else(|| "table".to_string());

        Self::validate_tool(&tool)?;
        Self::validate_output_format(&output_format)?;

        Ok(CliConfig {
            config_dir,
            tool,
            echo: self.echo.unwrap_or(true),
            verbose: self.verbose.unwrap_or(false),
            output_format,
        })
    }

    fn validate_tool(tool: &str) -> Result<()> {
        if tool.trim().is_empty() {
            return Err(AgoError::Config("Tool cannot be empty".to_string()));
        }
        Ok(())
    }

    fn validate_output_format(format: &str) -> Result<()> {
        match format {
            "table" | "json" => Ok(()),
            _ => Err(AgoError::Config(format!(
                "Invalid output format '{}'. Must be 'table' or 'json'",
                format
            ))),
        }
    }
}

fn resolve_config_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    explicit
        .or_else(config_dir_from_env)
        .or_else(default_config_dir)
        .ok_or_else(|| AgoError::Config("Cannot determine config directory".to_string()))
}

fn in_config_file(path: &Path, key: &str, err: AgoError) -> AgoError {
    match err {
        AgoError::Config(msg) => AgoError::Config(format!(
            "Invalid '{}' in config file '{}': {}",
            key,
            path.display(),
            msg
        )),
        other => other,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
