//! # cart-store
//!
//! Persistent cart store for checkout-rs.
//!
//! `FileStore` implements [`cart_core::CartStore`] with:
//! - a product catalog loaded once from a TOML file
//! - the cart kept as a JSON array, rewritten on every save
//! - an atomic compare-and-swap used by checkout to clear the cart
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cart_core::CartService;
//! use cart_store::FileStore;
//! use std::sync::Arc;
//!
//! // CATALOG_PATH / CART_PATH from the environment
//! let store = FileStore::from_env().await?;
//! let service = CartService::new(Arc::new(store));
//!
//! service.add_cart("Apple", 2).await?;
//! ```

pub mod config;
pub mod file;

// Re-exports
pub use config::StoreConfig;
pub use file::FileStore;
