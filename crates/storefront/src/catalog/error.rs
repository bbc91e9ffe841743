//! Error types for the catalog.

use store_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Error)]
pub enum ProductError {
    /// Empty name, negative price or negative stock.
    #[error("Invalid product: {0}")]
    Validation(String),
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),
    /// An underlying database error occurred.
    #[error("Store error: {0}")]
    Store(FrameworkError),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(product_error) => *product_error,
                Err(other) => ProductError::Store(FrameworkError::EntityError(other)),
            },
            other => ProductError::Store(other),
        }
    }
}
