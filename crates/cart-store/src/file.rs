//! # File Store
//!
//! `CartStore` persisted to disk: the catalog comes from a TOML file read
//! once at open, the cart lives in a JSON document rewritten on every save.

use crate::config::StoreConfig;
use async_trait::async_trait;
use cart_core::{CartError, CartItem, CartResult, CartStore, Product, ProductCatalog};
use std::io::ErrorKind;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

/// JSON file backed cart store
pub struct FileStore {
    config: StoreConfig,
    catalog: ProductCatalog,
    /// Serializes cart file access within this process
    lock: Mutex<()>,
}

impl FileStore {
    /// Open the store, loading and validating the catalog
    #[instrument(skip(config), fields(catalog = %config.catalog_path.display()))]
    pub async fn open(config: StoreConfig) -> CartResult<Self> {
        let content = fs::read_to_string(&config.catalog_path).await.map_err(|e| {
            CartError::Configuration(format!(
                "Failed to read {}: {}",
                config.catalog_path.display(),
                e
            ))
        })?;
        let catalog = ProductCatalog::from_toml(&content)?;

        info!(
            "Loaded {} products from {}",
            catalog.len(),
            config.catalog_path.display()
        );
        Self::with_catalog(config, catalog)
    }

    /// Create from environment configuration
    pub async fn from_env() -> CartResult<Self> {
        let config = StoreConfig::from_env()?;
        Self::open(config).await
    }

    /// Create with an already loaded catalog, validating it first
    pub fn with_catalog(config: StoreConfig, catalog: ProductCatalog) -> CartResult<Self> {
        catalog.validate()?;
        Ok(Self {
            config,
            catalog,
            lock: Mutex::new(()),
        })
    }

    /// Missing file reads as an empty cart. Caller holds the lock.
    async fn read_cart(&self) -> CartResult<Vec<CartItem>> {
        match fs::read(&self.config.cart_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a sibling temp file, then rename over the cart. Caller holds the lock.
    async fn write_cart(&self, items: &[CartItem]) -> CartResult<()> {
        if let Some(parent) = self.config.cart_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let body = serde_json::to_vec_pretty(items)?;
        let tmp = self.config.cart_tmp_path();
        fs::write(&tmp, body).await?;
        fs::rename(&tmp, &self.config.cart_path).await?;

        debug!(
            items = items.len(),
            path = %self.config.cart_path.display(),
            "Cart written"
        );
        Ok(())
    }
}

#[async_trait]
impl CartStore for FileStore {
    async fn get_product_by_name(&self, name: &str) -> CartResult<Product> {
        self.catalog
            .get(name)
            .cloned()
            .ok_or_else(|| CartError::ProductNotFound {
                name: name.to_string(),
            })
    }

    async fn get_product_data(&self) -> CartResult<Vec<Product>> {
        Ok(self.catalog.products.clone())
    }

    async fn get_cart_items(&self) -> CartResult<Vec<CartItem>> {
        let _guard = self.lock.lock().await;
        self.read_cart().await
    }

    async fn save_cart_items(&self, items: Vec<CartItem>) -> CartResult<()> {
        let _guard = self.lock.lock().await;
        self.write_cart(&items).await
    }

    async fn swap_cart_items(&self, expected: &[CartItem], new: Vec<CartItem>) -> CartResult<bool> {
        let _guard = self.lock.lock().await;
        let current = self.read_cart().await?;
        if current.as_slice() != expected {
            return Ok(false);
        }
        self.write_cart(&new).await?;
        Ok(true)
    }

    fn store_name(&self) -> &'static str {
        "file"
    }
}
