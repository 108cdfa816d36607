use async_trait::async_trait;

use crate::domain::{
    app::AppId, auth_error::AuthError, email::Email, password::Password,
    session_token::SessionToken, user_id::UserId,
};

/// The operations a transport may call.
///
/// Transports validate that required fields are present before calling and
/// own the mapping from [`AuthError`] kinds to their status codes.
#[async_trait]
pub trait Authenticator: Clone + Send + Sync + 'static {
    /// Verify credentials and mint a token scoped to `app_id`.
    async fn login(
        &self,
        email: Email,
        password: Password,
        app_id: AppId,
    ) -> Result<SessionToken, AuthError>;

    /// Create a new user. Never upserts.
    async fn register_new_user(&self, email: Email, password: Password)
    -> Result<UserId, AuthError>;

    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
}
