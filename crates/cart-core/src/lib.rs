//! # cart-core
//!
//! Core types and service for the checkout-rs shopping cart.
//!
//! This crate provides:
//! - `Product` and `ProductCatalog` for the catalog
//! - `CartItem` and `PaymentInformation` for the cart and its receipt
//! - `CartStore` trait for catalog/cart backends, plus `InMemoryStore`
//! - `CartService` with the add/remove/show/reset/list/pay operations
//! - `CartError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use cart_core::{CartService, InMemoryStore, Product, ProductCatalog};
//! use std::sync::Arc;
//!
//! let catalog = ProductCatalog::new().with_product(Product::new("Apple", 10));
//! let service = CartService::new(Arc::new(InMemoryStore::new(catalog)?));
//!
//! service.add_cart("Apple", 3).await?;
//! let receipt = service.pay(50).await?;
//! assert_eq!(receipt.change, 20);
//! ```

pub mod cart;
pub mod error;
pub mod memory;
pub mod product;
pub mod service;
pub mod store;

// Re-exports for convenience
pub use cart::{cart_total, CartItem, PaymentInformation};
pub use error::{CartError, CartResult, ErrorKind};
pub use memory::InMemoryStore;
pub use product::{Product, ProductCatalog};
pub use service::CartService;
pub use store::{BoxedCartStore, CartStore};
