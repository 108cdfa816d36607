use async_trait::async_trait;
use chrono::Duration;
use sso_core::{
    AppId, AppRegistry, AuthError, Authenticator, CredentialHasher, Email, Password,
    SessionToken, TokenIssuer, UserId, UserStore,
};

use crate::use_cases::{IsAdminUseCase, LoginUseCase, RegisterUseCase};

/// Orchestrates login, registration and admin checks over injected
/// collaborators.
///
/// The engine holds no mutable state of its own; cloning it clones the
/// collaborator handles, which share their underlying storage.
#[derive(Clone)]
pub struct AuthEngine<U, A, H, T> {
    user_store: U,
    app_registry: A,
    hasher: H,
    token_issuer: T,
    token_ttl: Duration,
}

impl<U, A, H, T> AuthEngine<U, A, H, T>
where
    U: UserStore,
    A: AppRegistry,
    H: CredentialHasher,
    T: TokenIssuer,
{
    pub fn new(
        user_store: U,
        app_registry: A,
        hasher: H,
        token_issuer: T,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_store,
            app_registry,
            hasher,
            token_issuer,
            token_ttl,
        }
    }
}

#[async_trait]
impl<U, A, H, T> Authenticator for AuthEngine<U, A, H, T>
where
    U: UserStore + Clone + 'static,
    A: AppRegistry + Clone + 'static,
    H: CredentialHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    async fn login(
        &self,
        email: Email,
        password: Password,
        app_id: AppId,
    ) -> Result<SessionToken, AuthError> {
        LoginUseCase::new(
            &self.user_store,
            &self.app_registry,
            &self.hasher,
            &self.token_issuer,
            self.token_ttl,
        )
        .execute(email, password, app_id)
        .await
    }

    async fn register_new_user(
        &self,
        email: Email,
        password: Password,
    ) -> Result<UserId, AuthError> {
        RegisterUseCase::new(&self.user_store, &self.hasher)
            .execute(email, password)
            .await
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        IsAdminUseCase::new(&self.user_store).execute(user_id).await
    }
}
