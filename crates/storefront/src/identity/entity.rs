use crate::identity::UserError;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;
use sqlx::SqliteConnection;
use store_framework::StoreEntity;

fn validate_name(name: &str) -> Result<(), UserError> {
    if name.trim().is_empty() {
        return Err(UserError::Validation("name must not be empty".into()));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), UserError> {
    let well_formed = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'))
        && !email.contains(char::is_whitespace);
    if !well_formed {
        return Err(UserError::Validation(format!("malformed email {email:?}")));
    }
    Ok(())
}

#[async_trait]
impl StoreEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Error = UserError;

    const TABLE: &'static str = "users";

    fn validate_create(params: &UserCreate) -> Result<(), UserError> {
        validate_name(&params.name)?;
        validate_email(&params.email)
    }

    fn validate_update(update: &UserUpdate) -> Result<(), UserError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(email) = &update.email {
            validate_email(email)?;
        }
        Ok(())
    }

    async fn insert(conn: &mut SqliteConnection, params: UserCreate) -> Result<UserId, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO users (name, email) VALUES (?, ?) RETURNING id")
            .bind(params.name.trim())
            .bind(params.email.trim())
            .fetch_one(conn)
            .await
    }

    async fn apply_update(
        conn: &mut SqliteConnection,
        id: &UserId,
        update: UserUpdate,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET name = COALESCE(?, name), email = COALESCE(?, email) WHERE id = ?",
        )
        .bind(update.name.as_deref().map(str::trim))
        .bind(update.email.as_deref().map(str::trim))
        .bind(id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }
}
