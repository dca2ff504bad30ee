//! Cart storage configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MEDIBAY_CART_PATH` - Path of the on-disk cart slot
//!   (default: ./data/cart.json)

use std::env::VarError;
use std::path::PathBuf;

use thiserror::Error;

use crate::slot::JsonFileSlot;

const CART_PATH_VAR: &str = "MEDIBAY_CART_PATH";
const DEFAULT_CART_PATH: &str = "./data/cart.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable is set but cannot be read as unicode.
    #[error("invalid environment variable {0}")]
    InvalidEnvVar(String),
}

/// Cart storage configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Path of the on-disk slot file.
    pub storage_path: PathBuf,
}

impl CartConfig {
    /// Configuration pointing at an explicit slot path.
    #[must_use]
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: storage_path.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable cannot be read.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_path = match std::env::var(CART_PATH_VAR) {
            Ok(value) => PathBuf::from(value),
            Err(VarError::NotPresent) => PathBuf::from(DEFAULT_CART_PATH),
            Err(VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidEnvVar(CART_PATH_VAR.to_string()));
            }
        };

        Ok(Self { storage_path })
    }

    /// Build the file slot for the configured path.
    #[must_use]
    pub fn slot(&self) -> JsonFileSlot {
        JsonFileSlot::new(&self.storage_path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_path() {
        let config = CartConfig::new("/tmp/cart.json");
        assert_eq!(config.storage_path, PathBuf::from("/tmp/cart.json"));
    }

    #[test]
    fn test_slot_uses_configured_path() {
        let config = CartConfig::new("/tmp/cart.json");
        assert_eq!(config.slot().path(), PathBuf::from("/tmp/cart.json"));
    }

    #[test]
    fn test_from_env_falls_back_to_default() {
        let config = CartConfig::from_env().unwrap();
        assert!(!config.storage_path.as_os_str().is_empty());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidEnvVar("MEDIBAY_CART_PATH".to_string());
        assert_eq!(
            err.to_string(),
            "invalid environment variable MEDIBAY_CART_PATH"
        );
    }
}
