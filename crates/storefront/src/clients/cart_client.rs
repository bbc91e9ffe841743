//! # Cart Client
//!
//! Cart operations for one user at a time. Holds a [`ProductClient`] to check that a
//! product exists before it goes into a cart.
use crate::cart::CartError;
use crate::clients::ProductClient;
use crate::model::{CartEntry, CartEntryCreate, CartEntryId, CartEntryUpdate, CartView, ProductId, UserId};
use async_trait::async_trait;
use store_framework::{FrameworkError, ResourceStore, StoreClient};
use tracing::{debug, info, instrument};

/// Client for shopping carts.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceStore<CartEntry>,
    products: ProductClient,
}

impl CartClient {
    pub fn new(inner: ResourceStore<CartEntry>, products: ProductClient) -> Self {
        Self { inner, products }
    }

    /// Adds one unit of `product_id` to the cart, creating the entry if needed.
    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<CartEntryId, CartError> {
        if self.products.get(product_id).await?.is_none() {
            return Err(CartError::ProductNotFound(product_id.to_string()));
        }
        let entry = CartEntryCreate {
            user_id,
            product_id,
            quantity: 1,
        };
        match self.inner.create(entry).await {
            Ok(id) => Ok(id),
            // The upsert refused to grow the quantity past i64::MAX.
            Err(FrameworkError::Database(sqlx::Error::RowNotFound)) => Err(CartError::Validation(
                "quantity would exceed the maximum".to_string(),
            )),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Sets the quantity of an entry. Zero or less removes it; a missing entry is left
    /// alone. Returns the entry as it now stands, if it still exists.
    #[instrument(skip(self))]
    pub async fn set_quantity(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<Option<CartEntry>, CartError> {
        let pool = self.inner.pool();
        let Some(entry) = CartEntry::find(pool, user_id, product_id).await? else {
            debug!("No such cart entry");
            return Ok(None);
        };

        if quantity <= 0 {
            CartEntry::remove(pool, user_id, product_id).await?;
            info!(cart_entry = %entry.id, "Removed from cart");
            return Ok(None);
        }

        match self.inner.update(entry.id, CartEntryUpdate { quantity }).await {
            Ok(updated) => Ok(Some(updated)),
            // Removed concurrently; same outcome as a missing entry.
            Err(FrameworkError::NotFound(_)) => Ok(None),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Removes the product from the cart. Returns whether it was there.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, user_id: UserId, product_id: ProductId) -> Result<bool, CartError> {
        let removed = CartEntry::remove(self.inner.pool(), user_id, product_id).await?;
        debug!(removed, "Remove from cart");
        Ok(removed)
    }

    /// The cart priced at current catalog prices.
    #[instrument(skip(self))]
    pub async fn view(&self, user_id: UserId) -> Result<CartView, CartError> {
        CartView::load(self.inner.pool(), user_id).await
    }

    #[instrument(skip(self))]
    pub async fn entries(&self, user_id: UserId) -> Result<Vec<CartEntry>, CartError> {
        Ok(CartEntry::for_user(self.inner.pool(), user_id).await?)
    }
}

#[async_trait]
impl StoreClient<CartEntry> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceStore<CartEntry> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::from(e)
    }
}
