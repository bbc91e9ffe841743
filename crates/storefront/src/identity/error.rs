use store_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid user: {0}")]
    Validation(String),
    #[error("A user with email {0} already exists")]
    AlreadyExists(String),
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("Store error: {0}")]
    Store(FrameworkError),
}

impl From<FrameworkError> for UserError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<UserError>() {
                Ok(user_error) => *user_error,
                Err(other) => UserError::Store(FrameworkError::EntityError(other)),
            },
            FrameworkError::Database(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                UserError::AlreadyExists(db.message().to_string())
            }
            other => UserError::Store(other),
        }
    }
}
