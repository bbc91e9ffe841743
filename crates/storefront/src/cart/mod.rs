//! # Cart
//!
//! Per-user shopping carts. One entry per `(user, product)` pair; adding a product that
//! is already in the cart bumps its quantity.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](store_framework::StoreEntity) implementation for [`CartEntry`](crate::model::CartEntry)
//! - [`error`] - [`CartError`]
//! - [`view`] - cart lines priced at the current catalog price
//!
//! Checkout empties a cart inside the placement transaction; this module never
//! clears a whole cart on its own.

pub mod entity;
pub mod error;
pub mod view;

pub use error::*;
