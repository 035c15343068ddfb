//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults suit local development.
//! - `MALL_CART_STORAGE_DIR` - Directory holding the durable cart slot
//!   (default: `./data`)
//! - `MALL_CART_STORAGE_KEY` - Slot key, used as the file stem
//!   (default: `mall-cart`)
//! - `MALL_LOW_STOCK_THRESHOLD` - Inclusive low-stock display boundary
//!   (default: 3)

use std::path::PathBuf;

use mall_core::LowStockPolicy;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart runtime configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Directory holding the durable slot file.
    pub storage_dir: PathBuf,
    /// Fixed key identifying the cart slot.
    pub storage_key: String,
    /// Display policy for low-stock flags.
    pub low_stock: LowStockPolicy,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./data"),
            storage_key: "mall-cart".to_owned(),
            low_stock: LowStockPolicy::default(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid (an empty
    /// or path-like storage key, a non-numeric threshold).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_dir = PathBuf::from(get_env_or_default("MALL_CART_STORAGE_DIR", "./data"));
        let storage_key = get_env_or_default("MALL_CART_STORAGE_KEY", "mall-cart");
        validate_storage_key(&storage_key)?;

        let low_stock = match get_optional_env("MALL_LOW_STOCK_THRESHOLD") {
            Some(raw) => {
                let threshold = raw.parse::<u32>().map_err(|e| {
                    ConfigError::InvalidEnvVar(
                        "MALL_LOW_STOCK_THRESHOLD".to_owned(),
                        e.to_string(),
                    )
                })?;
                LowStockPolicy::new(threshold)
            }
            None => LowStockPolicy::default(),
        };

        Ok(Self {
            storage_dir,
            storage_key,
            low_stock,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Validate that a storage key is usable as a file stem.
fn validate_storage_key(key: &str) -> Result<(), ConfigError> {
    if key.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            "MALL_CART_STORAGE_KEY".to_owned(),
            "must not be empty".to_owned(),
        ));
    }
    if key.contains(['/', '\\']) || key.contains("..") {
        return Err(ConfigError::InvalidEnvVar(
            "MALL_CART_STORAGE_KEY".to_owned(),
            "must not contain path separators".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_storage_key_accepts_plain_names() {
        assert!(validate_storage_key("mall-cart").is_ok());
        assert!(validate_storage_key("cart_v2").is_ok());
    }

    #[test]
    fn test_validate_storage_key_rejects_empty() {
        assert!(validate_storage_key("").is_err());
    }

    #[test]
    fn test_validate_storage_key_rejects_paths() {
        assert!(validate_storage_key("a/b").is_err());
        assert!(validate_storage_key("a\\b").is_err());
        assert!(validate_storage_key("..").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = CartConfig::default();
        assert_eq!(config.storage_key, "mall-cart");
        assert_eq!(config.storage_dir, PathBuf::from("./data"));
        assert_eq!(config.low_stock.threshold, 3);
    }
}
