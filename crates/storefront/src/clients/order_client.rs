//! # Order Client
//!
//! Checkout, order history and order detail.
use crate::identity::Identity;
use crate::model::{Order, OrderDetail, OrderId, UserId};
use crate::order::{history, CheckoutView, OrderError, OrderPlacement, PlacementError};
use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

/// Client for orders.
///
/// Orders are created only by [`OrderPlacement`] and never updated or deleted, so this
/// client does not implement [`StoreClient`](store_framework::StoreClient).
#[derive(Clone)]
pub struct OrderClient {
    pool: SqlitePool,
    placement: OrderPlacement,
}

impl OrderClient {
    pub fn new(pool: SqlitePool, placement: OrderPlacement) -> Self {
        Self { pool, placement }
    }

    #[instrument(skip(self))]
    pub async fn place_order(&self, user_id: UserId) -> Result<OrderId, PlacementError> {
        debug!("place_order called");
        self.placement.place_order(user_id).await
    }

    /// Checkout for whoever is asking. Anonymous callers are sent to log in and never
    /// reach the placement transaction.
    #[instrument(skip(self, identity))]
    pub async fn checkout(&self, identity: &Identity) -> CheckoutView {
        let Some(user_id) = identity.user_id() else {
            info!("Anonymous checkout, redirecting to login");
            return CheckoutView::login();
        };
        CheckoutView::from(self.place_order(user_id).await)
    }

    #[instrument(skip(self))]
    pub async fn history(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        let orders = history::history(&self.pool, user_id).await?;
        debug!(size = orders.len(), "History");
        Ok(orders)
    }

    /// An order of this user with its lines and payment. Someone else's order is
    /// reported as not found.
    #[instrument(skip(self))]
    pub async fn detail(&self, user_id: UserId, order_id: OrderId) -> Result<OrderDetail, OrderError> {
        history::detail(&self.pool, user_id, order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))
    }
}
