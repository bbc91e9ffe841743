//! # Generic Resource Store
//!
//! This module defines the `ResourceStore`, the component that manages the lifecycle
//! of rows for one [`StoreEntity`] type. Every mutation runs inside its own
//! [`UnitOfWork`], so a failed hook never leaves a partial write behind.

use crate::entity::StoreEntity;
use crate::error::FrameworkError;
use crate::unit_of_work::UnitOfWork;
use sqlx::SqlitePool;
use std::marker::PhantomData;
use tracing::{debug, info, warn};

/// The generic store that manages one table of entities.
///
/// # Architecture Note
/// The store owns nothing but a handle to the shared pool; it is cheap to clone and
/// safe to share across tasks. Concurrency control lives in the database: writes go
/// through `BEGIN IMMEDIATE` transactions, reads see the last committed state.
///
/// # Operations
///
/// * **Create**: validates the payload, calls [`StoreEntity::insert`] in a unit of
///   work and returns the generated id.
/// * **Get**: `SELECT * FROM <table> WHERE id = ?`, `None` when absent.
/// * **List**: every row, ordered by [`StoreEntity::ORDER_BY`].
/// * **Update**: validates, calls [`StoreEntity::apply_update`], re-reads the row in
///   the same transaction and returns it. Zero rows touched is `NotFound`.
/// * **Delete**: removes the row, `NotFound` when absent.
pub struct ResourceStore<T: StoreEntity> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> T>,
}

impl<T: StoreEntity> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

/// Short type name for log fields, e.g. "Product" rather than the full path.
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}

impl<T: StoreEntity> ResourceStore<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// The shared pool, for queries that span several tables.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, ?params, "Create");
        if let Err(e) = T::validate_create(&params) {
            warn!(entity_type, error = %e, "Create rejected");
            return Err(FrameworkError::entity(e));
        }

        let mut uow = UnitOfWork::begin(&self.pool, entity_type).await?;
        let id = match T::insert(uow.conn(), params).await {
            Ok(id) => id,
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                return Err(e.into());
            }
        };
        uow.commit().await?;

        info!(entity_type, %id, "Created");
        Ok(id)
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", T::TABLE);
        let item = sqlx::query_as::<_, T>(&sql)
            .bind(id.clone())
            .fetch_optional(&self.pool)
            .await?;
        debug!(entity_type = entity_type::<T>(), %id, found = item.is_some(), "Get");
        Ok(item)
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let sql = format!("SELECT * FROM {} ORDER BY {}", T::TABLE, T::ORDER_BY);
        let items = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        debug!(entity_type = entity_type::<T>(), size = items.len(), "List");
        Ok(items)
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, ?update, "Update");
        if let Err(e) = T::validate_update(&update) {
            warn!(entity_type, %id, error = %e, "Update rejected");
            return Err(FrameworkError::entity(e));
        }

        let mut uow = UnitOfWork::begin(&self.pool, entity_type).await?;
        let touched = T::apply_update(uow.conn(), &id, update).await?;
        if touched == 0 {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        }

        let sql = format!("SELECT * FROM {} WHERE id = ?", T::TABLE);
        let item = sqlx::query_as::<_, T>(&sql)
            .bind(id.clone())
            .fetch_one(uow.conn())
            .await?;
        uow.commit().await?;

        info!(entity_type, %id, "Updated");
        Ok(item)
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, "Delete");
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);

        let mut uow = UnitOfWork::begin(&self.pool, entity_type).await?;
        let deleted = sqlx::query(&sql)
            .bind(id.clone())
            .execute(uow.conn())
            .await?
            .rows_affected();
        if deleted == 0 {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        }
        uow.commit().await?;

        info!(entity_type, %id, "Deleted");
        Ok(())
    }
}
