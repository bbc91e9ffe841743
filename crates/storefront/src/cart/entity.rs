use crate::cart::CartError;
use crate::model::{CartEntry, CartEntryCreate, CartEntryId, CartEntryUpdate, ProductId, UserId};
use async_trait::async_trait;
use sqlx::{SqliteConnection, SqliteExecutor};
use store_framework::StoreEntity;

fn check_quantity(quantity: i64) -> Result<(), CartError> {
    if quantity <= 0 {
        return Err(CartError::Validation(format!(
            "quantity must be positive, got {quantity}"
        )));
    }
    Ok(())
}

#[async_trait]
impl StoreEntity for CartEntry {
    type Id = CartEntryId;
    type Create = CartEntryCreate;
    type Update = CartEntryUpdate;
    type Error = CartError;

    const TABLE: &'static str = "cart_items";

    fn validate_create(params: &CartEntryCreate) -> Result<(), CartError> {
        check_quantity(params.quantity)
    }

    fn validate_update(update: &CartEntryUpdate) -> Result<(), CartError> {
        check_quantity(update.quantity)
    }

    /// Inserts the entry or, if the user already has this product, adds to its quantity.
    /// Either way the id of the surviving row is returned. An addition that would
    /// overflow the stored quantity leaves the row untouched and yields
    /// `sqlx::Error::RowNotFound`.
    async fn insert(
        conn: &mut SqliteConnection,
        params: CartEntryCreate,
    ) -> Result<CartEntryId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO cart_items (user_id, product_id, quantity) VALUES (?, ?, ?)
             ON CONFLICT (user_id, product_id) DO UPDATE SET quantity = quantity + excluded.quantity
             WHERE cart_items.quantity <= 9223372036854775807 - excluded.quantity
             RETURNING id",
        )
        .bind(params.user_id)
        .bind(params.product_id)
        .bind(params.quantity)
        .fetch_one(conn)
        .await
    }

    async fn apply_update(
        conn: &mut SqliteConnection,
        id: &CartEntryId,
        update: CartEntryUpdate,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE cart_items SET quantity = ? WHERE id = ?")
            .bind(update.quantity)
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}

impl CartEntry {
    /// The user's entry for `product_id`, if any.
    pub async fn find<'e>(
        executor: impl SqliteExecutor<'e>,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<Option<CartEntry>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM cart_items WHERE user_id = ? AND product_id = ?")
            .bind(user_id)
            .bind(product_id)
            .fetch_optional(executor)
            .await
    }

    /// Every entry of the user, oldest first.
    pub async fn for_user<'e>(
        executor: impl SqliteExecutor<'e>,
        user_id: UserId,
    ) -> Result<Vec<CartEntry>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM cart_items WHERE user_id = ? ORDER BY id")
            .bind(user_id)
            .fetch_all(executor)
            .await
    }

    /// Removes the user's entry for `product_id`. Returns whether a row was deleted.
    pub async fn remove<'e>(
        executor: impl SqliteExecutor<'e>,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = ? AND product_id = ?")
            .bind(user_id)
            .bind(product_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
