use store_framework::{FrameworkError, Transient};
use thiserror::Error;

/// Why a checkout did not produce an order. Every variant means nothing was written.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Insufficient stock for {0}")]
    InsufficientStock(String),
    #[error("Order total does not fit in the money range")]
    AmountOverflow,
    /// Lock contention with another writer. Retried by [`OrderPlacement`](crate::order::OrderPlacement)
    /// and reported as [`PlacementError::StoreFailure`] once the attempts run out.
    #[error("Concurrent update conflict: {0}")]
    ConcurrencyConflict(sqlx::Error),
    #[error("Store failure: {0}")]
    StoreFailure(sqlx::Error),
}

impl From<sqlx::Error> for PlacementError {
    fn from(e: sqlx::Error) -> Self {
        if e.is_transient() {
            PlacementError::ConcurrencyConflict(e)
        } else {
            PlacementError::StoreFailure(e)
        }
    }
}

impl Transient for PlacementError {
    fn is_transient(&self) -> bool {
        matches!(self, PlacementError::ConcurrencyConflict(_))
    }
}

/// Errors from reading orders back.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Store error: {0}")]
    Store(FrameworkError),
}

impl From<sqlx::Error> for OrderError {
    fn from(e: sqlx::Error) -> Self {
        OrderError::Store(FrameworkError::Database(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlx_errors_are_classified() {
        assert!(matches!(
            PlacementError::from(sqlx::Error::PoolTimedOut),
            PlacementError::ConcurrencyConflict(_)
        ));
        assert!(matches!(
            PlacementError::from(sqlx::Error::RowNotFound),
            PlacementError::StoreFailure(_)
        ));
        assert!(!PlacementError::EmptyCart.is_transient());
    }

    #[test]
    fn test_insufficient_stock_message_names_the_product() {
        let e = PlacementError::InsufficientStock("Desk Lamp".into());
        assert_eq!(e.to_string(), "Insufficient stock for Desk Lamp");
    }
}
