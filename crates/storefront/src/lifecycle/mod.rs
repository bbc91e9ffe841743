//! # System Lifecycle
//!
//! Starting, wiring and stopping the storefront.
//!
//! ## Wiring
//!
//! One pool is created at startup and every client gets a clone of it; there is no
//! global connection state. Dependencies are injected at construction:
//!
//! ```rust,ignore
//! let products = ProductClient::new(ResourceStore::new(pool.clone()));
//! let carts = CartClient::new(ResourceStore::new(pool.clone()), products.clone());
//! let orders = OrderClient::new(pool.clone(), OrderPlacement::new(pool.clone(), retry));
//! ```
//!
//! ## Shutdown
//!
//! [`Storefront::shutdown`] closes the pool: new acquires fail and the call waits for
//! checked-out connections to come back, so an in-flight checkout either commits or
//! rolls back before the process exits.
//!
//! ## Observability
//!
//! Binaries call [`store_framework::tracing::setup_tracing`] once before
//! [`Storefront::start`]; `RUST_LOG` picks the level.

pub mod storefront;

pub use storefront::*;
