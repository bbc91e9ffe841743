//! # Storefront
//!
//! Catalog, carts and checkout for a small web shop, on SQLite.
//!
//! - [`model`] - rows, ids and [`Money`](model::Money)
//! - [`identity`], [`catalog`], [`cart`] - per-resource entities and errors
//! - [`order`] - the order placement transaction, history and [`CheckoutView`](order::CheckoutView)
//! - [`clients`] - the API the rest of an application calls
//! - [`lifecycle`] - [`Storefront`](lifecycle::Storefront) startup and shutdown
//! - [`config`] - environment configuration

pub mod cart;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod identity;
pub mod lifecycle;
pub mod model;
pub mod order;
