//! # Framework Errors
//!
//! This module defines the common error types used throughout the store framework.
//! Resource-specific clients translate these into their own error enums via
//! [`StoreClient::map_error`](crate::StoreClient::map_error).

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps an entity-level validation error.
    pub fn entity<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
        FrameworkError::EntityError(Box::new(e))
    }

    /// Returns the underlying database error, if this is one.
    pub fn as_database(&self) -> Option<&sqlx::Error> {
        match self {
            FrameworkError::Database(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors that may succeed when the whole unit of work is attempted again.
///
/// Used by [`RetryPolicy::run`](crate::RetryPolicy::run) to decide whether an
/// attempt is retried or surfaced to the caller.
pub trait Transient {
    fn is_transient(&self) -> bool;
}

// SQLite primary result codes for lock contention. Extended codes
// (e.g. SQLITE_BUSY_SNAPSHOT = 517) carry the primary code in the low byte.
const SQLITE_BUSY: i64 = 5;
const SQLITE_LOCKED: i64 = 6;

impl Transient for sqlx::Error {
    fn is_transient(&self) -> bool {
        match self {
            sqlx::Error::Database(db) => db
                .code()
                .and_then(|code| code.parse::<i64>().ok())
                .map(|code| matches!(code & 0xff, SQLITE_BUSY | SQLITE_LOCKED))
                .unwrap_or(false),
            sqlx::Error::PoolTimedOut => true,
            _ => false,
        }
    }
}

impl Transient for FrameworkError {
    fn is_transient(&self) -> bool {
        self.as_database().is_some_and(Transient::is_transient)
    }
}
