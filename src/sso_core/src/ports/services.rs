use async_trait::async_trait;
use chrono::Duration;
use thiserror::Error;

use crate::domain::{
    app::App, hashed_password::HashedPassword, password::Password, session_token::SessionToken,
    user::User,
};

#[derive(Debug, Error)]
pub enum HasherError {
    #[error("Hashing task was cancelled")]
    Cancelled,
    #[error("Malformed password hash: {0}")]
    MalformedHash(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Port for one-way password hashing.
///
/// `verify` returns `Ok(false)` on a mismatch; errors are reserved for
/// failures of the hasher itself.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: Password) -> Result<HashedPassword, HasherError>;
    async fn verify(
        &self,
        password_hash: &HashedPassword,
        candidate: &Password,
    ) -> Result<bool, HasherError>;

    /// A well-formed hash that no password matches, costing as much to
    /// `verify` as a real one. Verified in place of a missing user's hash.
    fn decoy_hash(&self) -> HashedPassword;
}

#[derive(Debug, Error)]
pub enum TokenIssuerError {
    #[error("Invalid token lifetime")]
    InvalidTtl,
    #[error("Failed to sign token: {0}")]
    SigningError(String),
}

/// Port for minting session tokens. Issuance is stateless.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User, app: &App, ttl: Duration)
    -> Result<SessionToken, TokenIssuerError>;
}
