use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use sso_core::{Email, HashedPassword, User, UserId, UserStore, UserStoreError};

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn save_user(
        &self,
        email: Email,
        password_hash: HashedPassword,
    ) -> Result<UserId, UserStoreError> {
        let user_id = UserId::new();

        sqlx::query(
            r#"
                INSERT INTO users (id, email, password_hash)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(*user_id.as_uuid())
        .bind(email.as_ref().expose_secret())
        .bind(password_hash.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(user_id)
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn user_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash, is_admin
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        let decode = |e: sqlx::Error| UserStoreError::UnexpectedError(e.to_string());
        let id: Uuid = row.try_get("id").map_err(decode)?;
        let email: String = row.try_get("email").map_err(decode)?;
        let password_hash: String = row.try_get("password_hash").map_err(decode)?;
        let is_admin: bool = row.try_get("is_admin").map_err(decode)?;

        let email = Email::try_from(Secret::from(email))
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(User::new(
            UserId::from(id),
            email,
            HashedPassword::from(password_hash),
            is_admin,
        ))
    }

    #[tracing::instrument(name = "Checking admin flag in PostgreSQL", skip_all)]
    async fn is_admin(&self, user_id: UserId) -> Result<bool, UserStoreError> {
        let row = sqlx::query("SELECT is_admin FROM users WHERE id = $1")
            .bind(*user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        row.try_get("is_admin")
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
    }
}
