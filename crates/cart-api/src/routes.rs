//! # Routes
//!
//! Axum router configuration for the cart API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET    /health - Health check
/// - GET    /api/v1/products - List catalog
/// - GET    /api/v1/cart - Show cart
/// - DELETE /api/v1/cart - Reset cart
/// - POST   /api/v1/cart/items - Add product to cart
/// - DELETE /api/v1/cart/items/{product_name} - Remove product from cart
/// - POST   /api/v1/pay - Pay and empty the cart
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let cart_routes = Router::new()
        .route("/", get(handlers::show_cart).delete(handlers::reset_cart))
        .route("/items", post(handlers::add_to_cart))
        .route("/items/{product_name}", delete(handlers::remove_from_cart));

    let api_routes = Router::new()
        .route("/products", get(handlers::list_products))
        .route("/pay", post(handlers::pay))
        .nest("/cart", cart_routes);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .nest("/api/v1", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
