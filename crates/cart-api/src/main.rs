//! # checkout
//!
//! Shopping cart and checkout server.
//!
//! ## Usage
//!
//! ```bash
//! # Optional environment variables
//! export CATALOG_PATH=config/products.toml
//! export CART_PATH=data/cart.json
//! export CART_BACKEND=file   # or memory
//!
//! # Run the server
//! checkout
//! ```

use cart_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let state = AppState::new().await?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Cart store: {}", state.store_name());
    info!(
        "Products loaded: {}",
        state.service.get_all_products().await?.len()
    );

    let app = routes::create_router(state);

    info!("Checkout starting on http://{}", addr);

    if !is_prod {
        info!("Cart: GET http://{}/api/v1/cart", addr);
        info!("Pay: POST http://{}/api/v1/pay", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
