//! Configuration module
//!
//! Settings are read from a TOML file (~/.config/bcrypt-hasher/config.toml
//! by default):
//!
//! ```toml
//! [bcrypt]
//! version = "2a"
//! cost = 10
//!
//! [logging]
//! level = "info"
//! format = "text"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::{BcryptVersion, CostFactor, HashError, DEFAULT_COST};
use crate::infrastructure::crypto::{BcryptHasher, BcryptMethod};
use crate::logging::LoggingConfig;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid bcrypt settings: {0}")]
    Hash(#[from] HashError),
}

/// Top-level settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HasherSettings {
    pub bcrypt: BcryptSettings,
    pub logging: LoggingConfig,
}

/// `[bcrypt]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BcryptSettings {
    /// Version tag written into new hashes
    pub version: BcryptVersion,
    /// log2 cost for new hashes. Existing hashes keep verifying at the cost
    /// they were made with.
    pub cost: u32,
}

impl Default for BcryptSettings {
    fn default() -> Self {
        Self {
            version: BcryptVersion::default(),
            cost: DEFAULT_COST,
        }
    }
}

impl BcryptSettings {
    pub fn build_hasher(&self) -> Result<BcryptHasher, HashError> {
        BcryptHasher::new(self.version, self.cost)
    }

    pub fn build_method(&self) -> Result<BcryptMethod, HashError> {
        self.build_hasher().map(BcryptMethod::new)
    }
}

impl HasherSettings {
    /// Load and validate settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            version = %settings.bcrypt.version,
            cost = settings.bcrypt.cost,
            "Hasher settings loaded"
        );
        Ok(settings)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject an out-of-range cost up front instead of at first use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        CostFactor::new(self.bcrypt.cost)?;
        Ok(())
    }
}

/// Default location of the settings file
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bcrypt-hasher")
        .join("config.toml")
}
