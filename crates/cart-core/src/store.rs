//! # Cart Store Trait
//!
//! Capability trait for the catalog and cart persistence backend.
//! Implementations: in-memory (this crate), JSON file (`cart-store`).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      CartStore (trait)                      │
//! │  ├── get_product_by_name()                                  │
//! │  ├── get_product_data()                                     │
//! │  ├── get_cart_items()                                       │
//! │  ├── save_cart_items()                                      │
//! │  └── swap_cart_items()                                      │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                 ┌──────────┴──────────┐
//!                 │                     │
//!         ┌───────┴───────┐     ┌───────┴───────┐
//!         │ InMemoryStore │     │   FileStore   │
//!         └───────────────┘     └───────────────┘
//! ```

use crate::cart::CartItem;
use crate::error::CartResult;
use crate::product::Product;
use async_trait::async_trait;
use std::sync::Arc;

/// Data-access contract used by [`CartService`](crate::service::CartService).
///
/// Errors returned here reach the service caller unchanged.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Look up a catalog product.
    ///
    /// Fails with `CartError::ProductNotFound` when no product has that name.
    async fn get_product_by_name(&self, name: &str) -> CartResult<Product>;

    /// Full catalog, in catalog order.
    async fn get_product_data(&self) -> CartResult<Vec<Product>>;

    /// Current cart contents. Order is stable across saves.
    async fn get_cart_items(&self) -> CartResult<Vec<CartItem>>;

    /// Replace the cart wholesale.
    async fn save_cart_items(&self, items: Vec<CartItem>) -> CartResult<()>;

    /// Replace the cart with `new` only if it still equals `expected`.
    ///
    /// Returns `Ok(false)` and leaves the cart alone when it has changed.
    /// The provided implementation is a plain read-compare-save; stores
    /// that can do better should override it with an atomic version.
    async fn swap_cart_items(&self, expected: &[CartItem], new: Vec<CartItem>) -> CartResult<bool> {
        let current = self.get_cart_items().await?;
        if current.as_slice() != expected {
            return Ok(false);
        }
        self.save_cart_items(new).await?;
        Ok(true)
    }

    /// Backend name (for logging).
    fn store_name(&self) -> &'static str;
}

/// Type alias for a shared store handle (dynamic dispatch)
pub type BoxedCartStore = Arc<dyn CartStore>;
