//! # Identity
//!
//! User records and the identity provider that turns an optional session user id into
//! an [`Identity`].
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](store_framework::StoreEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//!
//! ## Usage
//!
//! ```rust,ignore
//! let id = user_client.register(UserCreate {
//!     name: "Alice".to_string(),
//!     email: "alice@example.com".to_string(),
//! }).await?;
//!
//! match user_client.resolve(Some(id)).await? {
//!     Identity::User(user) => println!("hello {}", user.name),
//!     Identity::Anonymous => println!("please log in"),
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{User, UserId};

/// Who is making a request. Checkout requires [`Identity::User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    User(User),
    Anonymous,
}

impl Identity {
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Identity::User(user) => Some(user.id),
            Identity::Anonymous => None,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Identity::Anonymous)
    }
}
