use crate::catalog::ProductError;
use crate::model::{Money, Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use sqlx::SqliteConnection;
use store_framework::StoreEntity;

fn check_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::Validation("name must not be empty".into()));
    }
    Ok(())
}

fn check_price(price: Money) -> Result<(), ProductError> {
    if price.is_negative() {
        return Err(ProductError::Validation(format!("price {price} is negative")));
    }
    Ok(())
}

fn check_stock(stock: i64) -> Result<(), ProductError> {
    if stock < 0 {
        return Err(ProductError::Validation(format!("stock {stock} is negative")));
    }
    Ok(())
}

#[async_trait]
impl StoreEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Error = ProductError;

    const TABLE: &'static str = "products";

    fn validate_create(params: &ProductCreate) -> Result<(), ProductError> {
        check_name(&params.name)?;
        check_price(params.price)?;
        check_stock(params.stock)
    }

    fn validate_update(update: &ProductUpdate) -> Result<(), ProductError> {
        if let Some(name) = &update.name {
            check_name(name)?;
        }
        if let Some(price) = update.price {
            check_price(price)?;
        }
        if let Some(stock) = update.stock {
            check_stock(stock)?;
        }
        Ok(())
    }

    async fn insert(
        conn: &mut SqliteConnection,
        params: ProductCreate,
    ) -> Result<ProductId, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO products (name, price, stock) VALUES (?, ?, ?) RETURNING id")
            .bind(params.name.trim())
            .bind(params.price)
            .bind(params.stock)
            .fetch_one(conn)
            .await
    }

    async fn apply_update(
        conn: &mut SqliteConnection,
        id: &ProductId,
        update: ProductUpdate,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE products
             SET name = COALESCE(?, name), price = COALESCE(?, price), stock = COALESCE(?, stock)
             WHERE id = ?",
        )
        .bind(update.name.as_deref().map(str::trim))
        .bind(update.price)
        .bind(update.stock)
        .bind(id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_validation() {
        let ok = ProductCreate {
            name: "Lamp".into(),
            price: Money(1999),
            stock: 3,
        };
        assert!(Product::validate_create(&ok).is_ok());

        let free = ProductCreate {
            price: Money::ZERO,
            stock: 0,
            ..ok.clone()
        };
        assert!(Product::validate_create(&free).is_ok());

        let negative_price = ProductCreate {
            price: Money(-1),
            ..ok.clone()
        };
        assert!(matches!(
            Product::validate_create(&negative_price),
            Err(ProductError::Validation(_))
        ));

        let blank = ProductCreate {
            name: " ".into(),
            ..ok
        };
        assert!(Product::validate_create(&blank).is_err());
    }

    #[test]
    fn test_update_validation_only_checks_present_fields() {
        assert!(Product::validate_update(&ProductUpdate::default()).is_ok());
        let update = ProductUpdate {
            stock: Some(-5),
            ..Default::default()
        };
        assert!(Product::validate_update(&update).is_err());
    }
}
