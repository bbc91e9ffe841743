//! # Product Client
//!
//! Provides a high‑level API for the catalog.
//! It wraps a `ResourceStore<Product>` and exposes domain‑specific methods.
use crate::catalog::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use store_framework::{FrameworkError, ResourceStore, StoreClient};
use tracing::{debug, instrument};

/// Client for the product catalog.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceStore<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceStore<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceStore<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Partial update of name, price or stock. Returns the updated product.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Every product, in id order.
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<i64, ProductError> {
        debug!("Checking stock for product {}", id);
        match self.get(id).await? {
            Some(product) => Ok(product.stock),
            None => Err(ProductError::NotFound(id.to_string())),
        }
    }
}
