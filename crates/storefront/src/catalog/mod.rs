//! # Catalog
//!
//! Products with their price and stock level.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](store_framework::StoreEntity) implementation for [`Product`](crate::model::Product)
//! - [`error`] - [`ProductError`] type for type-safe error handling
//!
//! ## Stock
//!
//! The catalog client can read stock ([`ProductClient::check_stock`](crate::clients::ProductClient::check_stock))
//! and overwrite it as an administrative correction. Decrements for sales happen only
//! inside the order placement transaction, which guards them with `stock >= quantity`.

pub mod entity;
pub mod error;

pub use error::*;
