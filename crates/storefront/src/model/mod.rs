//! Plain data types shared by every storefront module.
//!
//! Rows derive [`sqlx::FromRow`]; ids and [`Money`] are `#[sqlx(transparent)]` newtypes
//! so they bind and decode as plain integers.

pub mod cart;
pub mod money;
pub mod order;
pub mod payment;
pub mod product;
pub mod user;

pub use cart::*;
pub use money::*;
pub use order::*;
pub use payment::*;
pub use product::*;
pub use user::*;
