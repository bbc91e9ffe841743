use crate::clients::{CartClient, OrderClient, ProductClient, UserClient};
use crate::config::{ConfigError, StorefrontConfig};
use crate::order::OrderPlacement;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::SqlitePool;
use store_framework::{connect, ResourceStore, RetryPolicy};
use thiserror::Error;
use tracing::info;

/// Schema migrations, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] MigrateError),
}

/// The running storefront: one pool and a client per resource.
pub struct Storefront {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pool: SqlitePool,
}

impl Storefront {
    /// Connects to `config.database_url`, applies migrations and wires the clients.
    pub async fn start(config: &StorefrontConfig) -> Result<Self, StartupError> {
        info!(?config, "Starting storefront");
        let pool = connect(&config.database_url, &config.pool_settings()).await?;
        Self::from_pool(pool, config.retry_policy()).await
    }

    /// Same as [`Storefront::start`] for an existing pool.
    pub async fn from_pool(pool: SqlitePool, retry: RetryPolicy) -> Result<Self, StartupError> {
        MIGRATOR.run(&pool).await?;
        info!("Schema up to date");

        let user_client = UserClient::new(ResourceStore::new(pool.clone()));
        let product_client = ProductClient::new(ResourceStore::new(pool.clone()));
        let cart_client = CartClient::new(ResourceStore::new(pool.clone()), product_client.clone());
        let order_client = OrderClient::new(pool.clone(), OrderPlacement::new(pool.clone(), retry));

        Ok(Self {
            user_client,
            product_client,
            cart_client,
            order_client,
            pool,
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes the pool after in-flight work has released its connections.
    pub async fn shutdown(self) {
        self.pool.close().await;
        info!("Storefront stopped");
    }
}
