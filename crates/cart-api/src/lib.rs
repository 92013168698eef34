//! # cart-api
//!
//! HTTP API layer for checkout-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for the catalog, the cart and payment
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/v1/products` | List products |
//! | GET | `/api/v1/cart` | Show cart |
//! | DELETE | `/api/v1/cart` | Reset cart |
//! | POST | `/api/v1/cart/items` | Add to cart |
//! | DELETE | `/api/v1/cart/items/:product_name` | Remove from cart |
//! | POST | `/api/v1/pay` | Pay for the cart |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState, StoreBackend};
