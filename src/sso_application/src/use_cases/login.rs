use chrono::Duration;
use sso_core::{
    AppId, AppRegistry, AppRegistryError, AuthError, CredentialHasher, Email, Password,
    SessionToken, TokenIssuer, UserStore, UserStoreError,
};

use crate::errors::{from_hasher, internal};

const OP: &str = "Auth.Login";

/// Login use case - verifies credentials and mints an app-scoped token
pub struct LoginUseCase<'a, U, A, H, T>
where
    U: UserStore,
    A: AppRegistry,
    H: CredentialHasher,
    T: TokenIssuer,
{
    user_store: &'a U,
    app_registry: &'a A,
    hasher: &'a H,
    token_issuer: &'a T,
    token_ttl: Duration,
}

impl<'a, U, A, H, T> LoginUseCase<'a, U, A, H, T>
where
    U: UserStore,
    A: AppRegistry,
    H: CredentialHasher,
    T: TokenIssuer,
{
    pub fn new(
        user_store: &'a U,
        app_registry: &'a A,
        hasher: &'a H,
        token_issuer: &'a T,
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

    /// Execute the login use case
    ///
    /// An unknown email and a wrong password both yield
    /// `AuthError::InvalidCredentials` after one password verification. An
    /// empty `app_id` is rejected before any store is touched.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all, fields(app_id = %app_id))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
        app_id: AppId,
    ) -> Result<SessionToken, AuthError> {
        if app_id.is_empty() {
            tracing::warn!("empty app id");
            return Err(AuthError::AppNotFound);
        }

        tracing::info!("attempting to login user");

        let user = match self.user_store.user_by_email(&email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => {
                tracing::warn!("user not found");
                // Same hashing cost as a wrong password.
                self.hasher
                    .verify(&self.hasher.decoy_hash(), &password)
                    .await
                    .map_err(|e| from_hasher(OP, e))?;
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(internal(OP, e)),
        };

        let matches = self
            .hasher
            .verify(user.password_hash(), &password)
            .await
            .map_err(|e| from_hasher(OP, e))?;
        if !matches {
            tracing::warn!(user_id = %user.id(), "invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let app = match self.app_registry.app(app_id).await {
            Ok(app) => app,
            Err(AppRegistryError::AppNotFound) => {
                tracing::warn!("app not found");
                return Err(AuthError::AppNotFound);
            }
            Err(e) => return Err(internal(OP, e)),
        };

        let token = self
            .token_issuer
            .issue(&user, &app, self.token_ttl)
            .map_err(|e| internal(OP, e))?;

        tracing::info!(user_id = %user.id(), "user logged in successfully");

        Ok(token)
    }
}
