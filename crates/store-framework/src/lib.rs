//! # Store Framework
//!
//! Generic building blocks for resource-oriented persistence on SQLite via `sqlx`.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`StoreEntity`]) - the table, its DTOs and its insert/update SQL
//! 2. **Store Layer** ([`ResourceStore`]) - transactions, not-found detection and tracing
//! 3. **Interface Layer** ([`StoreClient`]) - domain clients with their own error types
//!
//! Business code writes the per-table SQL once in the entity and gets a uniform
//! create/get/list/update/delete API for free.
//!
//! ## Transactions
//!
//! Every mutation runs in a [`UnitOfWork`]: an immediate SQLite transaction that is
//! rolled back when dropped uncommitted. Multi-table operations open their own unit
//! of work and use [`RetryPolicy`] to re-run it on lock contention
//! ([`Transient`] errors).
//!
//! ```rust,ignore
//! let policy = RetryPolicy::default();
//! policy.run(|attempt| async move {
//!     let mut uow = UnitOfWork::begin(&pool, "transfer").await?;
//!     sqlx::query("UPDATE ...").execute(uow.conn()).await?;
//!     uow.commit().await
//! }).await?;
//! ```
//!
//! ## Concurrency Model
//!
//! - Stores and clients are cheap clones around one shared pool
//! - Readers never block (WAL journal)
//! - Writers are serialized by `BEGIN IMMEDIATE`; waiting is bounded by the busy timeout

pub mod client_trait;
pub mod entity;
pub mod error;
pub mod pool;
pub mod store;
pub mod tracing;
pub mod unit_of_work;

// Re-export core types for convenience
pub use client_trait::StoreClient;
pub use entity::StoreEntity;
pub use error::{FrameworkError, Transient};
pub use pool::{connect, PoolSettings};
pub use store::ResourceStore;
pub use unit_of_work::{RetryPolicy, UnitOfWork};
