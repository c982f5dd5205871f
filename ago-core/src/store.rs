//! Persisted alias storage
//!
//! The store owns the location of `aliases.json` and nothing else: the base
//! directory is handed in at construction, so callers decide where state
//! lives.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{aliases_path, AliasData};
use crate::error::{AgoError, Result};

/// Loads and saves the alias mapping inside a configuration directory.
///
/// No locking is performed; two invocations racing on the same directory can
/// lose an update.
#[derive(Debug, Clone)]
pub struct AliasStore {
    dir: PathBuf,
}

impl AliasStore {
    /// Create a store rooted at `dir`. Nothing is touched on disk.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Configuration directory holding the alias file.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the alias file.
    pub fn path(&self) -> PathBuf {
        aliases_path(&self.dir)
    }

    /// Load the alias mapping.
    ///
    /// A missing file yields an empty mapping.
    pub fn load(&self) -> Result<AliasData> {
        let path = self.path();

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No alias file at {}, starting empty", path.display());
                return Ok(AliasData::empty());
            }
            Err(e) => {
                return Err(AgoError::Store(format!(
                    "Failed to open alias file '{}': {}",
                    path.display(),
                    e
                )))
            }
        };

        let data = AliasData::from_json(&content).map_err(|e| {
            AgoError::Store(format!(
                "Failed to decode alias file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded {} aliases from {}", data.len(), path.display());
        Ok(data)
    }

    /// Persist the alias mapping, creating the directory if needed.
    pub fn save(&self, data: &AliasData) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AgoError::Store(format!(
                "Failed to create config directory '{}': {}",
                self.dir.display(),
                e
            ))
        })?;

        let mut content = data.to_json()?;
        content.push('\n');

        let path = self.path();
        write_atomic(&path, &content)?;

        debug!("Saved {} aliases to {}", data.len(), path.display());
        Ok(())
    }
}

/// Write content atomically (write to temp, then rename).
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content).map_err(|e| {
        AgoError::Store(format!(
            "Failed to write alias file '{}': {}",
            temp_path.display(),
            e
        ))
    })?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(AgoError::Store(format!(
            "Failed to replace alias file '{}': {}",
            path.display(),
            e
        )));
    }

    Ok(())
}
