use crate::model::{Money, ProductId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for cart entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(transparent)]
pub struct CartEntryId(pub i64);

impl From<i64> for CartEntryId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for CartEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_entry_{}", self.0)
    }
}

/// One product in one user's cart. `(user_id, product_id)` is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CartEntry {
    pub id: CartEntryId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Adds `quantity` units; merged into an existing entry for the same product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartEntryCreate {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartEntryUpdate {
    pub quantity: i64,
}

/// A cart entry priced at the product's current price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    #[sqlx(skip)]
    pub line_total: Money,
}

/// Read model of a cart: its lines and their sum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: Money,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
