use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    app::{App, AppId},
    email::Email,
    hashed_password::HashedPassword,
    user::User,
    user_id::UserId,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence for users.
///
/// Implementations own identifier assignment and must enforce email
/// uniqueness atomically: two concurrent `save_user` calls with the same
/// email yield exactly one success.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn save_user(
        &self,
        email: Email,
        password_hash: HashedPassword,
    ) -> Result<UserId, UserStoreError>;
    async fn user_by_email(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn is_admin(&self, user_id: UserId) -> Result<bool, UserStoreError>;
}

// AppRegistry port trait and errors
#[derive(Debug, Error)]
pub enum AppRegistryError {
    #[error("App not found")]
    AppNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AppRegistryError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AppNotFound, Self::AppNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait AppRegistry: Send + Sync {
    async fn app(&self, app_id: AppId) -> Result<App, AppRegistryError>;
}
