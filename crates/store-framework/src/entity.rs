//! # StoreEntity Trait
//!
//! The `StoreEntity` trait defines the contract that every persisted resource (User,
//! Product, CartEntry, Order, …) implements to be managed by the generic
//! [`ResourceStore`](crate::ResourceStore). It specifies associated types for the id,
//! the create and update DTOs and the validation error, plus the two SQL hooks that
//! differ per table (`insert` and `apply_update`). Reads and deletes are generic.
//!
//! # Architecture Note
//! By defining one contract for every table we write the CRUD plumbing (connection
//! handling, transactions, not-found detection, tracing) *once* in `ResourceStore`.
//! Associated types keep it type safe: a `Product` store only accepts a
//! `ProductCreate` payload and only hands out `ProductId`s.
//!
//! # Provided Methods
//! - [`StoreEntity::validate_create`]
//! - [`StoreEntity::validate_update`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Encode, FromRow, Sqlite, SqliteConnection, Type};
use std::fmt::{Debug, Display};

/// Trait that any persisted entity must implement to be managed by `ResourceStore`.
///
/// The hooks receive a `&mut SqliteConnection` that is already inside a
/// [`UnitOfWork`](crate::UnitOfWork), so a hook may issue several statements and
/// they commit or roll back together.
#[async_trait]
pub trait StoreEntity:
    for<'r> FromRow<'r, SqliteRow> + Clone + Debug + Send + Sync + Unpin + 'static
{
    /// The primary key type (usually a `#[sqlx(transparent)]` newtype over `i64`).
    type Id: Clone + Debug + Display + Send + Sync + for<'q> Encode<'q, Sqlite> + Type<Sqlite> + 'static;

    /// The data required to create a new row.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing row.
    type Update: Send + Sync + Debug;

    /// Validation error for create and update payloads.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Table backing this entity. Must have an `id` primary key column.
    const TABLE: &'static str;

    /// `ORDER BY` clause used by [`ResourceStore::list`](crate::ResourceStore::list).
    const ORDER_BY: &'static str = "id";

    /// Checks a create payload before any connection is taken.
    fn validate_create(_params: &Self::Create) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Checks an update payload before any connection is taken.
    fn validate_update(_update: &Self::Update) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Inserts the row and returns its generated id.
    async fn insert(conn: &mut SqliteConnection, params: Self::Create)
        -> Result<Self::Id, sqlx::Error>;

    /// Applies the update and returns the number of rows touched (0 means not found).
    async fn apply_update(
        conn: &mut SqliteConnection,
        id: &Self::Id,
        update: Self::Update,
    ) -> Result<u64, sqlx::Error>;
}
