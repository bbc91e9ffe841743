use crate::cart::CartError;
use crate::model::{CartLine, CartView, Money, UserId};
use sqlx::SqliteExecutor;

impl CartView {
    /// Prices every line and sums the cart. Fails only on money overflow.
    pub fn from_lines(mut lines: Vec<CartLine>) -> Result<Self, CartError> {
        let mut total = Money::ZERO;
        for line in &mut lines {
            line.line_total = line
                .unit_price
                .times(line.quantity)
                .ok_or(CartError::AmountOverflow)?;
            total = total
                .checked_add(line.line_total)
                .ok_or(CartError::AmountOverflow)?;
        }
        Ok(Self { lines, total })
    }

    /// Loads the user's cart joined with current product names and prices.
    pub async fn load<'e>(
        executor: impl SqliteExecutor<'e>,
        user_id: UserId,
    ) -> Result<Self, CartError> {
        let lines: Vec<CartLine> = sqlx::query_as(
            "SELECT c.product_id AS product_id, p.name AS name, p.price AS unit_price,
                    c.quantity AS quantity
             FROM cart_items c
             JOIN products p ON p.id = c.product_id
             WHERE c.user_id = ?
             ORDER BY c.id",
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?;
        Self::from_lines(lines)
    }
}
