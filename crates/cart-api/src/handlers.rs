//! # Request Handlers
//!
//! Axum request handlers for the cart API.
//! Each handler is a thin wrapper over one `CartService` operation.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cart_core::{cart_total, CartError, CartItem, ErrorKind, PaymentInformation};
use serde::{Deserialize, Serialize};
use tracing::{error, field, instrument, Span};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Add-to-cart request
#[derive(Debug, Deserialize)]
pub struct AddCartRequest {
    pub product_name: String,
    /// Units to add
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

/// Payment request
#[derive(Debug, Deserialize)]
pub struct PayRequest {
    /// Money handed over, in integer units
    pub money: i64,
}

/// Cart contents
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub count: usize,
    pub total: i64,
}

impl CartResponse {
    fn from_items(items: Vec<CartItem>) -> Result<Self, CartError> {
        let total = cart_total(&items)?;
        Ok(Self {
            count: items.len(),
            items,
            total,
        })
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: ErrorKind,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, kind: ErrorKind, code: u16) -> Self {
        Self {
            error: error.into(),
            kind,
            code,
        }
    }
}

type ApiResult<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

fn cart_error_to_response(err: CartError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    if code >= 500 {
        error!("Store failure: {}", err);
    }
    let response = ErrorResponse::new(err.to_string(), err.kind(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

/// Malformed or mistyped JSON bodies get the same error shape as service errors
fn rejection_to_response(rejection: JsonRejection) -> (StatusCode, Json<ErrorResponse>) {
    let status = rejection.status();
    let response = ErrorResponse::new(
        rejection.body_text(),
        ErrorKind::InvalidArgument,
        status.as_u16(),
    );
    (status, Json(response))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "checkout",
        "store": state.store_name(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List the catalog
pub async fn list_products(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let products = state
        .service
        .get_all_products()
        .await
        .map_err(cart_error_to_response)?;

    Ok(Json(serde_json::json!({
        "count": products.len(),
        "products": products,
    })))
}

/// Show the cart
pub async fn show_cart(State(state): State<AppState>) -> ApiResult<Json<CartResponse>> {
    let items = state
        .service
        .show_cart()
        .await
        .map_err(cart_error_to_response)?;

    CartResponse::from_items(items)
        .map(Json)
        .map_err(cart_error_to_response)
}

/// Add a product to the cart, returning the updated cart
#[instrument(skip_all, fields(product = field::Empty, quantity = field::Empty))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    payload: Result<Json<AddCartRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CartResponse>)> {
    let Json(request) = payload.map_err(rejection_to_response)?;
    let span = Span::current();
    span.record("product", request.product_name.as_str());
    span.record("quantity", request.quantity);

    state
        .service
        .add_cart(&request.product_name, request.quantity)
        .await
        .map_err(cart_error_to_response)?;

    let Json(cart) = show_cart(State(state)).await?;
    Ok((StatusCode::CREATED, Json(cart)))
}

/// Remove a product's line from the cart
#[instrument(skip(state))]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(product_name): Path<String>,
) -> ApiResult<Json<CartResponse>> {
    state
        .service
        .remove_cart(&product_name)
        .await
        .map_err(cart_error_to_response)?;

    show_cart(State(state)).await
}

/// Empty the cart
pub async fn reset_cart(State(state): State<AppState>) -> ApiResult<StatusCode> {
    state
        .service
        .reset_cart()
        .await
        .map_err(cart_error_to_response)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Pay for the cart
#[instrument(skip_all, fields(money = field::Empty))]
pub async fn pay(
    State(state): State<AppState>,
    payload: Result<Json<PayRequest>, JsonRejection>,
) -> ApiResult<Json<PaymentInformation>> {
    let Json(request) = payload.map_err(rejection_to_response)?;
    Span::current().record("money", request.money);

    state
        .service
        .pay(request.money)
        .await
        .map(Json)
        .map_err(cart_error_to_response)
}
