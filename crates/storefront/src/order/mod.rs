//! # Orders
//!
//! Order placement, order history and the checkout outcome handed to the presentation
//! layer.
//!
//! ## Structure
//!
//! - [`placement`] - [`OrderPlacement`], the all-or-nothing checkout transaction
//! - [`history`] - read-only order history and order detail queries
//! - [`checkout`] - [`CheckoutView`], what the caller should show after a checkout
//! - [`error`] - [`PlacementError`] and [`OrderError`]
//!
//! ## Placement in one picture
//!
//! ```text
//! BEGIN IMMEDIATE
//!   load cart ⋈ products  ── empty ──────────────► EmptyCart
//!   stock < quantity?     ── yes ────────────────► InsufficientStock(name)
//!   total = Σ price × qty ── overflow ───────────► AmountOverflow
//!   INSERT orders
//!   per line: INSERT order_items, guarded stock decrement
//!   INSERT payments (COD)
//!   DELETE cart_items
//! COMMIT                  ── lock contention ────► retry, then StoreFailure
//! ```
//!
//! Any error before `COMMIT` drops the [`UnitOfWork`](store_framework::UnitOfWork) and
//! rolls the whole attempt back.

pub mod checkout;
pub mod error;
pub mod history;
pub mod placement;

pub use checkout::*;
pub use error::*;
pub use placement::*;
