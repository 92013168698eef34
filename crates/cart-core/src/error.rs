//! # Cart Error Types
//!
//! Typed error handling for the checkout service.
//! Every service and store operation returns `Result<T, CartError>`, so a
//! store failure reaches the caller as the same variant the store produced.

use serde::Serialize;
use thiserror::Error;

/// Semantic category of a [`CartError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Caller-supplied value violates a precondition
    InvalidArgument,
    /// Referenced product or cart entry does not exist
    NotFound,
    /// Payment amount is less than the cart total
    InsufficientFunds,
    /// Cart changed underneath a compare-and-swap
    Conflict,
    /// Failure raised by the backing store
    StoreFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InsufficientFunds => "insufficient_funds",
            ErrorKind::Conflict => "conflict",
            ErrorKind::StoreFailure => "store_failure",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core error type for all cart operations
#[derive(Debug, Error)]
pub enum CartError {
    /// Quantity must be strictly positive
    #[error("invalid quantity: {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// Invalid request data (arithmetic overflow, malformed input)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Product not found in catalog
    #[error("Product not found: {name}")]
    ProductNotFound { name: String },

    /// Product is not in the cart
    #[error("product not found in cart: {name}")]
    CartItemNotFound { name: String },

    /// Money handed over does not cover the cart total
    #[error("money is not enough: total {total}, paid {paid}")]
    InsufficientFunds { total: i64, paid: i64 },

    /// Cart was modified between read and swap
    #[error("cart changed during checkout")]
    CartChanged,

    /// Configuration errors (bad catalog, missing paths)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Filesystem error from a persistent store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Any other store failure
    #[error("Store error: {0}")]
    Store(String),
}

impl CartError {
    /// Returns the semantic kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::InvalidQuantity { .. } | CartError::InvalidRequest(_) => {
                ErrorKind::InvalidArgument
            }
            CartError::ProductNotFound { .. } | CartError::CartItemNotFound { .. } => {
                ErrorKind::NotFound
            }
            CartError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            CartError::CartChanged => ErrorKind::Conflict,
            CartError::Configuration(_)
            | CartError::Io(_)
            | CartError::Serialization(_)
            | CartError::Store(_) => ErrorKind::StoreFailure,
        }
    }

    /// Returns true if retrying the same call may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, CartError::CartChanged | CartError::Io(_))
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::InvalidArgument => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::InsufficientFunds => 402,
            ErrorKind::Conflict => 409,
            ErrorKind::StoreFailure => 500,
        }
    }
}

impl From<serde_json::Error> for CartError {
    fn from(err: serde_json::Error) -> Self {
        CartError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for CartError {
    fn from(err: toml::de::Error) -> Self {
        CartError::Configuration(err.to_string())
    }
}

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            CartError::InvalidQuantity { quantity: 0 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            CartError::CartItemNotFound { name: "Apple".into() }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            CartError::InsufficientFunds { total: 50, paid: 40 }.kind(),
            ErrorKind::InsufficientFunds
        );
        assert_eq!(
            CartError::Store("disk full".into()).kind(),
            ErrorKind::StoreFailure
        );
    }

    #[test]
    fn test_retryable_errors() {
        assert!(CartError::CartChanged.is_retryable());
        assert!(!CartError::InvalidQuantity { quantity: -1 }.is_retryable());
        assert!(!CartError::InsufficientFunds { total: 10, paid: 1 }.is_retryable());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(CartError::InvalidRequest("x".into()).status_code(), 400);
        assert_eq!(
            CartError::ProductNotFound { name: "x".into() }.status_code(),
            404
        );
        assert_eq!(
            CartError::InsufficientFunds { total: 2, paid: 1 }.status_code(),
            402
        );
        assert_eq!(CartError::CartChanged.status_code(), 409);
        assert_eq!(CartError::Serialization("bad".into()).status_code(), 500);
    }

    #[test]
    fn test_messages_keep_legacy_wording() {
        let err = CartError::InsufficientFunds { total: 50, paid: 40 };
        assert!(err.to_string().starts_with("money is not enough"));

        let err = CartError::InvalidQuantity { quantity: 0 };
        assert!(err.to_string().starts_with("invalid quantity"));
    }
}
