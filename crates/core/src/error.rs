//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant carries enough context for the shell to print the message
/// verbatim and keep going; nothing here is retried by the domain itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A constructor or mutation argument failed validation (blank name,
    /// negative price, negative quantity).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A purchase quantity was not positive.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// More units were requested than the product has in stock.
    #[error("not enough stock of {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: i64,
        available: i64,
    },

    /// An order referenced a product the store does not hold.
    #[error("product {0} not found in store")]
    ProductNotFound(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn insufficient_stock(product: impl Into<String>, requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            product: product.into(),
            requested,
            available,
        }
    }

    pub fn product_not_found(product: impl Into<String>) -> Self {
        Self::ProductNotFound(product.into())
    }
}
