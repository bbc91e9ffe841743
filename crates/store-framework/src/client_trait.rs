//! # StoreClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default `get`,
//! `list` and `delete` methods built on top of a generic `ResourceStore`.
use crate::{FrameworkError, ResourceStore, StoreEntity};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// pub struct ProductClient {
///     inner: ResourceStore<Product>,
/// }
///
/// #[async_trait]
/// impl StoreClient<Product> for ProductClient {
///     type Error = ProductError;
///
///     fn inner(&self) -> &ResourceStore<Product> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         ProductError::Store(e)
///     }
/// }
///
/// // get(), list() and delete() are now available on ProductClient.
/// ```
#[async_trait]
pub trait StoreClient<T: StoreEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceStore.
    fn inner(&self) -> &ResourceStore<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity of this type.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
