//! Pawn table configuration, loadable from TOML.
//!
//! ```toml
//! [pawn_table]
//! capacity = 131072
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of entries per pawn table.
pub const DEFAULT_CAPACITY: usize = 131_072;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("pawn table capacity must be a non-zero power of two, got {0}")]
    Capacity(usize),
}

/// Pawn table section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PawnTableConfig {
    /// Number of slots. Fixed for the lifetime of a table.
    pub capacity: usize,
}

impl Default for PawnTableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PawnConfig {
    pub pawn_table: PawnTableConfig,
}

impl PawnConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: PawnConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_capacity(self.pawn_table.capacity)
    }
}

pub(crate) fn validate_capacity(capacity: usize) -> Result<(), ConfigError> {
    if capacity.is_power_of_two() {
        Ok(())
    } else {
        Err(ConfigError::Capacity(capacity))
    }
}
