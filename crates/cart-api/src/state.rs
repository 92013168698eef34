//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the cart service and the configuration it was built from.

use cart_core::{BoxedCartStore, CartService, InMemoryStore, ProductCatalog};
use cart_store::{FileStore, StoreConfig};
use std::net::SocketAddr;
use std::sync::Arc;

/// Which `CartStore` backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// JSON cart file (survives restarts)
    File,
    /// Process memory (cart lost on exit)
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::File => "file",
            StoreBackend::Memory => "memory",
        }
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StoreBackend::File),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow::anyhow!("Unknown CART_BACKEND: {}", other)),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Cart store backend
    pub backend: StoreBackend,
    /// Catalog and cart file locations
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let backend = match std::env::var("CART_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => StoreBackend::File,
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            backend,
            store: StoreConfig::from_env()?,
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Cart operations
    pub service: CartService,
    /// Application config
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build state from environment configuration
    pub async fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        Self::from_config(config).await
    }

    /// Open the configured store and wrap it in a service
    pub async fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let store: BoxedCartStore = match config.backend {
            StoreBackend::File => Arc::new(FileStore::open(config.store.clone()).await?),
            StoreBackend::Memory => {
                let content = tokio::fs::read_to_string(&config.store.catalog_path)
                    .await
                    .map_err(|e| {
                        anyhow::anyhow!(
                            "Failed to read {}: {}",
                            config.store.catalog_path.display(),
                            e
                        )
                    })?;
                Arc::new(InMemoryStore::new(ProductCatalog::from_toml(&content)?)?)
            }
        };

        Ok(Self::with_store(store, config))
    }

    /// Build state around an existing store
    pub fn with_store(store: BoxedCartStore, config: AppConfig) -> Self {
        Self {
            service: CartService::new(store),
            config: Arc::new(config),
        }
    }

    /// Name of the active store backend
    pub fn store_name(&self) -> &'static str {
        self.service.store().store_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parse() {
        assert_eq!("file".parse::<StoreBackend>().unwrap(), StoreBackend::File);
        assert_eq!(" Memory ".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert!("redis".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "test".to_string(),
            backend: StoreBackend::Memory,
            store: StoreConfig::default(),
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
        assert!(!config.is_production());
    }

    #[test]
    fn test_bad_socket_addr() {
        let config = AppConfig {
            host: "not a host".to_string(),
            port: 3000,
            environment: "test".to_string(),
            backend: StoreBackend::Memory,
            store: StoreConfig::default(),
        };

        assert!(config.socket_addr().is_err());
    }
}
