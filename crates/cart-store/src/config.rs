//! # Store Configuration
//!
//! File locations for the persistent store.
//! Paths are loaded from environment variables (or a `.env` file).

use cart_core::CartError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_CATALOG_PATH: &str = "config/products.toml";
pub const DEFAULT_CART_PATH: &str = "data/cart.json";

/// File store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// TOML product catalog
    pub catalog_path: PathBuf,

    /// JSON cart document
    pub cart_path: PathBuf,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - `CATALOG_PATH` (default `config/products.toml`)
    /// - `CART_PATH` (default `data/cart.json`)
    pub fn from_env() -> Result<Self, CartError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let catalog_path =
            env::var("CATALOG_PATH").unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());
        let cart_path = env::var("CART_PATH").unwrap_or_else(|_| DEFAULT_CART_PATH.to_string());

        if catalog_path.trim().is_empty() {
            return Err(CartError::Configuration(
                "CATALOG_PATH must not be empty".to_string(),
            ));
        }

        if cart_path.trim().is_empty() {
            return Err(CartError::Configuration(
                "CART_PATH must not be empty".to_string(),
            ));
        }

        Ok(Self::new(catalog_path, cart_path))
    }

    /// Create config with explicit paths (for testing)
    pub fn new(catalog_path: impl Into<PathBuf>, cart_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            cart_path: cart_path.into(),
        }
    }

    /// Sibling path used for write-then-rename
    pub fn cart_tmp_path(&self) -> PathBuf {
        let mut tmp = self.cart_path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_PATH, DEFAULT_CART_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.catalog_path, PathBuf::from("config/products.toml"));
        assert_eq!(config.cart_path, PathBuf::from("data/cart.json"));
    }

    #[test]
    fn test_tmp_path() {
        let config = StoreConfig::new("catalog.toml", "/var/lib/checkout/cart.json");
        assert_eq!(
            config.cart_tmp_path(),
            PathBuf::from("/var/lib/checkout/cart.json.tmp")
        );
    }
}
