//! Error types for carts.

use crate::catalog::ProductError;
use store_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
    /// The product to add does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("Invalid cart entry: {0}")]
    Validation(String),
    #[error("Cart total does not fit in the money range")]
    AmountOverflow,
    #[error("Catalog error: {0}")]
    Catalog(#[from] ProductError),
    #[error("Store error: {0}")]
    Store(FrameworkError),
}

impl From<FrameworkError> for CartError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<CartError>() {
                Ok(cart_error) => *cart_error,
                Err(other) => CartError::Store(FrameworkError::EntityError(other)),
            },
            other => CartError::Store(other),
        }
    }
}

impl From<sqlx::Error> for CartError {
    fn from(e: sqlx::Error) -> Self {
        CartError::Store(FrameworkError::Database(e))
    }
}
