//! # Unit of Work
//!
//! Scoped transaction handles and the bounded retry loop around them.
//!
//! A [`UnitOfWork`] is opened with `BEGIN IMMEDIATE`, which reserves the SQLite
//! write lock for the whole transaction. Two units of work therefore never
//! interleave their writes, and a read-check-write sequence inside one unit is
//! serialized against every other writer. Dropping a unit without calling
//! [`UnitOfWork::commit`] rolls it back, so every early return (`?`) releases the
//! transaction.

use crate::error::Transient;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// A write transaction that rolls back unless committed.
#[must_use = "a unit of work rolls back when dropped without commit"]
pub struct UnitOfWork {
    tx: Transaction<'static, Sqlite>,
    label: &'static str,
}

impl UnitOfWork {
    /// Acquires a pooled connection and opens an immediate (write-reserving) transaction.
    pub async fn begin(pool: &SqlitePool, label: &'static str) -> Result<Self, sqlx::Error> {
        let tx = pool.begin_with("BEGIN IMMEDIATE").await?;
        debug!(label, "Unit of work started");
        Ok(Self { tx, label })
    }

    /// The connection bound to this transaction.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    pub async fn commit(self) -> Result<(), sqlx::Error> {
        let label = self.label;
        self.tx.commit().await?;
        debug!(label, "Unit of work committed");
        Ok(())
    }

    pub async fn rollback(self) -> Result<(), sqlx::Error> {
        let label = self.label;
        self.tx.rollback().await?;
        debug!(label, "Unit of work rolled back");
        Ok(())
    }
}

/// Bounded retry for units of work that fail with a [`Transient`] error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(25),
        }
    }
}

impl RetryPolicy {
    /// `max_attempts` counts the first attempt and is raised to at least 1.
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before attempt `n + 1` is `backoff * n`.
    pub fn backoff(&self) -> Duration {
        self.backoff
    }

    /// Runs `op` until it succeeds, fails with a non-transient error, or the
    /// attempts are used up. The closure receives the 1-based attempt number.
    pub async fn run<T, E, F, Fut>(&self, mut op: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Transient + Display,
    {
        let max_attempts = self.max_attempts;
        let mut attempt = 1;
        loop {
            match op(attempt).await {
                Err(e) if e.is_transient() && attempt < max_attempts => {
                    warn!(attempt, max_attempts, error = %e, "Transient failure, retrying");
                    tokio::time::sleep(self.backoff * attempt).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug, thiserror::Error)]
    enum TestError {
        #[error("busy")]
        Busy,
        #[error("fatal")]
        Fatal,
    }

    impl Transient for TestError {
        fn is_transient(&self) -> bool {
            matches!(self, TestError::Busy)
        }
    }

    #[tokio::test]
    async fn test_retries_transient_until_success() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(3, Duration::ZERO);

        let result = policy
            .run(|attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 3 {
                        Err(TestError::Busy)
                    } else {
                        Ok(attempt)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(2, Duration::ZERO);

        let result: Result<(), TestError> = policy
            .run(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(TestError::Busy) }
            })
            .await;

        assert!(matches!(result, Err(TestError::Busy)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_does_not_retry_fatal_errors() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::default();

        let result: Result<(), TestError> = policy
            .run(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(TestError::Fatal) }
            })
            .await;

        assert!(matches!(result, Err(TestError::Fatal)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_zero_attempts_is_clamped() {
        let policy = RetryPolicy::new(0, Duration::from_millis(5));
        assert_eq!(policy.max_attempts(), 1);
        assert_eq!(policy.backoff(), Duration::from_millis(5));
    }

    #[tokio::test]
    async fn test_zero_attempt_policy_still_runs_once() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(0, Duration::ZERO);

        let result: Result<(), TestError> = policy
            .run(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(TestError::Busy) }
            })
            .await;

        assert!(matches!(result, Err(TestError::Busy)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
