//! Read-only order queries. Every query is scoped to the requesting user.

use crate::model::{Order, OrderDetail, OrderId, OrderLine, Payment, UserId};
use sqlx::SqlitePool;

/// The user's orders, newest first.
pub async fn history(pool: &SqlitePool, user_id: UserId) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM orders WHERE user_id = ? ORDER BY created_at DESC, id DESC")
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// One order with its lines and payment, or `None` if it does not exist or belongs
/// to someone else.
pub async fn detail(
    pool: &SqlitePool,
    user_id: UserId,
    order_id: OrderId,
) -> Result<Option<OrderDetail>, sqlx::Error> {
    let order: Option<Order> = sqlx::query_as("SELECT * FROM orders WHERE id = ? AND user_id = ?")
        .bind(order_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    let Some(order) = order else {
        return Ok(None);
    };

    let lines: Vec<OrderLine> = sqlx::query_as(
        "SELECT oi.id AS id, oi.product_id AS product_id, p.name AS product_name,
                oi.quantity AS quantity, oi.price AS price
         FROM order_items oi
         LEFT JOIN products p ON p.id = oi.product_id
         WHERE oi.order_id = ?
         ORDER BY oi.id",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;

    let payment: Option<Payment> = sqlx::query_as("SELECT * FROM payments WHERE order_id = ?")
        .bind(order_id)
        .fetch_optional(pool)
        .await?;

    Ok(Some(OrderDetail {
        order,
        lines,
        payment,
    }))
}
