/// Represents a placed order.
///
/// Orders are written only by the placement transaction
/// ([`OrderPlacement`](crate::order::OrderPlacement)) and are immutable afterwards.
use crate::model::{Money, Payment, ProductId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(transparent)]
pub struct OrderId(pub i64);

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub total_amount: Money,
    pub created_at: DateTime<Utc>,
}

/// A purchased line with the unit price captured at placement time.
///
/// `product_name` is `None` once the product has been removed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderLine {
    pub id: i64,
    pub product_id: ProductId,
    pub product_name: Option<String>,
    pub quantity: i64,
    pub price: Money,
}

impl OrderLine {
    pub fn line_total(&self) -> Option<Money> {
        self.price.times(self.quantity)
    }
}

/// An order with its lines and payment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub order: Order,
    pub lines: Vec<OrderLine>,
    pub payment: Option<Payment>,
}
