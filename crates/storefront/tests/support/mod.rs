#![allow(dead_code)]

use std::ops::Deref;
use storefront::config::StorefrontConfig;
use storefront::lifecycle::Storefront;
use storefront::model::{Money, ProductCreate, ProductId, UserCreate, UserId};
use tempfile::TempDir;

/// A storefront on a throw-away database file. The directory lives as long as this.
pub struct TestStore {
    store: Storefront,
    _dir: TempDir,
}

impl Deref for TestStore {
    type Target = Storefront;

    fn deref(&self) -> &Storefront {
        &self.store
    }
}

impl TestStore {
    pub async fn start() -> Self {
        Self::start_with(|_| {}).await
    }

    pub async fn start_with(tweak: impl FnOnce(&mut StorefrontConfig)) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("storefront.db").display());
        let mut config = StorefrontConfig::for_database(url);
        tweak(&mut config);
        let store = Storefront::start(&config).await.unwrap();
        Self { store, _dir: dir }
    }

    pub async fn user(&self, name: &str) -> UserId {
        self.user_client
            .register(UserCreate {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
            })
            .await
            .unwrap()
    }

    pub async fn product(&self, name: &str, price_cents: i64, stock: i64) -> ProductId {
        self.product_client
            .create_product(ProductCreate {
                name: name.to_string(),
                price: Money::from_cents(price_cents),
                stock,
            })
            .await
            .unwrap()
    }

    /// Puts exactly `quantity` units of the product in the user's cart.
    pub async fn put_in_cart(&self, user: UserId, product: ProductId, quantity: i64) {
        self.cart_client.add_item(user, product).await.unwrap();
        self.cart_client
            .set_quantity(user, product, quantity)
            .await
            .unwrap();
    }

    pub async fn stock(&self, product: ProductId) -> i64 {
        self.product_client.check_stock(product).await.unwrap()
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(self.pool())
            .await
            .unwrap()
    }
}
