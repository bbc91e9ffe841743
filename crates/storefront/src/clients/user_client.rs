//! # User Client
//!
//! Registration, profile updates and the identity provider.
use crate::identity::{Identity, UserError};
use crate::model::{User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;
use store_framework::{FrameworkError, ResourceStore, StoreClient};
use tracing::{debug, instrument};

/// Client for user records.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceStore<User>,
}

impl UserClient {
    pub fn new(inner: ResourceStore<User>) -> Self {
        Self { inner }
    }

    /// Registers a new user. Emails are unique.
    #[instrument(skip(self))]
    pub async fn register(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        let email = params.email.trim().to_string();
        self.inner
            .create(params)
            .await
            .map_err(|e| match Self::map_error(e) {
                UserError::AlreadyExists(_) => UserError::AlreadyExists(email),
                other => other,
            })
    }

    #[instrument(skip(self))]
    pub async fn update_profile(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Resolves the user id carried by a session into an [`Identity`].
    ///
    /// No id, or an id that no longer exists, is [`Identity::Anonymous`].
    #[instrument(skip(self))]
    pub async fn resolve(&self, session_user: Option<UserId>) -> Result<Identity, UserError> {
        let Some(id) = session_user else {
            return Ok(Identity::Anonymous);
        };
        match self.get(id).await? {
            Some(user) => Ok(Identity::User(user)),
            None => {
                debug!(user_id = %id, "Unknown session user");
                Ok(Identity::Anonymous)
            }
        }
    }
}

#[async_trait]
impl StoreClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceStore<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from(e)
    }
}
