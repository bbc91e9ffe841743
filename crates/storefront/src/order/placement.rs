//! # Order Placement
//!
//! Turns a user's cart into an order in one database transaction:
//! order row, line items with snapshotted prices, stock decrements, a payment record
//! and clearing the cart either all happen or none do.
//!
//! ## Concurrency
//!
//! The transaction is opened with `BEGIN IMMEDIATE`, so two placements never
//! interleave: the stock read in step 1 is still the stock when the decrement runs.
//! The decrement itself is guarded (`WHERE stock >= ?`) and the schema carries
//! `CHECK (stock >= 0)`, so stock cannot go negative even if a writer bypasses this
//! module. Lock contention surfaces as [`PlacementError::ConcurrencyConflict`] and
//! the whole attempt is retried under the configured [`RetryPolicy`].

use crate::model::{Money, OrderId, PaymentMethod, ProductId, UserId};
use crate::order::PlacementError;
use chrono::Utc;
use sqlx::SqlitePool;
use store_framework::{RetryPolicy, UnitOfWork};
use tracing::{debug, info, instrument, trace, warn};

/// The steps of one placement attempt, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStep {
    LoadCart,
    InsertOrder,
    InsertItem,
    DecrementStock,
    InsertPayment,
    ClearCart,
    Commit,
}

/// A cart entry joined with the product state it is checked against.
#[derive(Debug, sqlx::FromRow)]
struct CheckoutLine {
    product_id: ProductId,
    name: String,
    price: Money,
    stock: i64,
    quantity: i64,
}

/// The order placement transaction.
#[derive(Clone)]
pub struct OrderPlacement {
    pool: SqlitePool,
    retry: RetryPolicy,
    #[cfg(test)]
    fail_at: Option<PlacementStep>,
}

impl OrderPlacement {
    pub fn new(pool: SqlitePool, retry: RetryPolicy) -> Self {
        Self {
            pool,
            retry,
            #[cfg(test)]
            fail_at: None,
        }
    }

    /// Places an order for everything in the user's cart.
    ///
    /// Not idempotent: every successful call creates a new order. A second call for
    /// the same user finds the cart empty and fails with [`PlacementError::EmptyCart`].
    #[instrument(skip(self))]
    pub async fn place_order(&self, user_id: UserId) -> Result<OrderId, PlacementError> {
        let result = self
            .retry
            .run(|attempt| self.attempt(user_id, attempt))
            .await;

        match result {
            Err(PlacementError::ConcurrencyConflict(e)) => {
                warn!(error = %e, "Giving up after lock contention");
                Err(PlacementError::StoreFailure(e))
            }
            Err(e) => {
                warn!(error = %e, "Order not placed");
                Err(e)
            }
            ok => ok,
        }
    }

    async fn attempt(&self, user_id: UserId, attempt: u32) -> Result<OrderId, PlacementError> {
        debug!(attempt, "Placement attempt");
        let mut uow = UnitOfWork::begin(&self.pool, "place_order").await?;

        // 1. Cart joined with current product state
        self.checkpoint(PlacementStep::LoadCart)?;
        let lines: Vec<CheckoutLine> = sqlx::query_as(
            "SELECT c.product_id AS product_id, p.name AS name, p.price AS price,
                    p.stock AS stock, c.quantity AS quantity
             FROM cart_items c
             JOIN products p ON p.id = c.product_id
             WHERE c.user_id = ?
             ORDER BY c.id",
        )
        .bind(user_id)
        .fetch_all(uow.conn())
        .await?;

        if lines.is_empty() {
            return Err(PlacementError::EmptyCart);
        }

        // 2. Stock check
        if let Some(short) = lines.iter().find(|line| line.stock < line.quantity) {
            debug!(product_id = %short.product_id, stock = short.stock, wanted = short.quantity, "Short on stock");
            return Err(PlacementError::InsufficientStock(short.name.clone()));
        }

        // 3. Total at the prices just read
        let total = lines
            .iter()
            .try_fold(Money::ZERO, |acc, line| {
                line.price
                    .times(line.quantity)
                    .and_then(|line_total| acc.checked_add(line_total))
            })
            .ok_or(PlacementError::AmountOverflow)?;

        // 4. Order row
        self.checkpoint(PlacementStep::InsertOrder)?;
        let order_id: OrderId = sqlx::query_scalar(
            "INSERT INTO orders (user_id, total_amount, created_at) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(user_id)
        .bind(total)
        .bind(Utc::now())
        .fetch_one(uow.conn())
        .await?;

        // 5. Line items and stock
        for line in &lines {
            self.checkpoint(PlacementStep::InsertItem)?;
            sqlx::query(
                "INSERT INTO order_items (order_id, product_id, quantity, price) VALUES (?, ?, ?, ?)",
            )
            .bind(order_id)
            .bind(line.product_id)
            .bind(line.quantity)
            .bind(line.price)
            .execute(uow.conn())
            .await?;

            self.checkpoint(PlacementStep::DecrementStock)?;
            let decremented = sqlx::query(
                "UPDATE products SET stock = stock - ? WHERE id = ? AND stock >= ?",
            )
            .bind(line.quantity)
            .bind(line.product_id)
            .bind(line.quantity)
            .execute(uow.conn())
            .await?
            .rows_affected();
            if decremented != 1 {
                return Err(PlacementError::InsufficientStock(line.name.clone()));
            }
        }

        // 6. Payment
        self.checkpoint(PlacementStep::InsertPayment)?;
        sqlx::query("INSERT INTO payments (order_id, payment_method, transaction_id) VALUES (?, ?, ?)")
            .bind(order_id)
            .bind(PaymentMethod::CashOnDelivery.as_str())
            .bind(user_id.0.to_string())
            .execute(uow.conn())
            .await?;

        // 7. Cart
        self.checkpoint(PlacementStep::ClearCart)?;
        sqlx::query("DELETE FROM cart_items WHERE user_id = ?")
            .bind(user_id)
            .execute(uow.conn())
            .await?;

        // 8. Commit
        self.checkpoint(PlacementStep::Commit)?;
        uow.commit().await?;

        info!(%order_id, %total, items = lines.len(), "Order placed");
        Ok(order_id)
    }

    #[cfg(not(test))]
    fn checkpoint(&self, step: PlacementStep) -> Result<(), PlacementError> {
        trace!(?step, "Checkpoint");
        Ok(())
    }

    #[cfg(test)]
    fn checkpoint(&self, step: PlacementStep) -> Result<(), PlacementError> {
        trace!(?step, "Checkpoint");
        if self.fail_at == Some(step) {
            return Err(PlacementError::StoreFailure(sqlx::Error::Protocol(format!(
                "injected failure at {step:?}"
            ))));
        }
        Ok(())
    }
}
