//! # Clients
//!
//! Type-safe, cloneable handles that the rest of the application talks to. Each wraps a
//! generic [`ResourceStore`](store_framework::ResourceStore) (or the placement
//! transaction) and exposes domain-specific methods with domain-specific errors.
//!
//! `get`, `list` and `delete` come from [`StoreClient`](store_framework::StoreClient);
//! bring the trait into scope to use them.

pub mod cart_client;
pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use cart_client::CartClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use user_client::UserClient;
