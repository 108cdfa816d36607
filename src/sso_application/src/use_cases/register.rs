use sso_core::{AuthError, CredentialHasher, Email, Password, UserId, UserStore, UserStoreError};

use crate::errors::{from_hasher, internal};

const OP: &str = "Auth.RegisterNewUser";

/// Register use case - hashes the password and creates the user
pub struct RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: CredentialHasher,
{
    user_store: &'a U,
    hasher: &'a H,
}

impl<'a, U, H> RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: CredentialHasher,
{
    pub fn new(user_store: &'a U, hasher: &'a H) -> Self {
        Self { user_store, hasher }
    }

    /// Execute the register use case
    ///
    /// # Returns
    /// The store-assigned id of the new user, or `AuthError::UserExists` if
    /// the email is taken. Uniqueness is left entirely to the store.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email, password: Password) -> Result<UserId, AuthError> {
        tracing::info!("registering user");

        let password_hash = self
            .hasher
            .hash(password)
            .await
            .map_err(|e| from_hasher(OP, e))?;

        let user_id = match self.user_store.save_user(email, password_hash).await {
            Ok(user_id) => user_id,
            Err(UserStoreError::UserAlreadyExists) => {
                tracing::warn!("user already exists");
                return Err(AuthError::UserExists);
            }
            Err(e) => return Err(internal(OP, e)),
        };

        tracing::info!(user_id = %user_id, "user registered");

        Ok(user_id)
    }
}
