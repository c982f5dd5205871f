//! Package alias data - mutable via the `alias` command
//!
//! Stored in `{config_dir}/aliases.json`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{AgoError, Result};

/// Package alias data stored in aliases.json
///
/// Maps short alias names to full package paths. The file is a flat JSON
/// object, so the mapping is (de)serialized transparently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasData {
    /// Alias name to package path mapping, ordered by alias
    pub aliases: BTreeMap<String, String>,
}

impl AliasData {
    /// Create empty alias data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the package path for an alias.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Set the package path for an alias.
    ///
    /// Returns the previous target if the alias was already defined.
    pub fn set(&mut self, alias: impl Into<String>, target: impl Into<String>) -> Option<String> {
        self.aliases.insert(alias.into(), target.into())
    }

    /// Remove an alias.
    ///
    /// Returns `true` if an alias was removed, `false` if none existed.
    pub fn remove(&mut self, alias: &str) -> bool {
        self.aliases.remove(alias).is_some()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Iterate over `(alias, target)` pairs in ascending alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, t)| (a.as_str(), t.as_str()))
    }

    /// Parse AliasData from a JSON string.
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serialize AliasData to a JSON string (2-space indent, sorted keys).
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl FromIterator<(String, String)> for AliasData {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            aliases: iter.into_iter().collect(),
        }
    }
}

/// Check that an alias name can be defined.
pub fn validate_alias(alias: &str) -> Result<()> {
    if alias.trim().is_empty() {
        return Err(AgoError::InvalidAlias(
            "alias must not be empty".to_string(),
        ));
    }
    Ok(())
}
