use sso_core::{AuthError, UserId, UserStore, UserStoreError};

use crate::errors::internal;

const OP: &str = "Auth.IsAdmin";

/// IsAdmin use case - reads the admin flag of a user
pub struct IsAdminUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> IsAdminUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    /// Execute the is-admin use case. An unknown user is `UserNotFound`.
    #[tracing::instrument(name = "IsAdminUseCase::execute", skip_all, fields(user_id = %user_id))]
    pub async fn execute(&self, user_id: UserId) -> Result<bool, AuthError> {
        tracing::info!("checking if user is admin");

        let is_admin = match self.user_store.is_admin(user_id).await {
            Ok(is_admin) => is_admin,
            Err(UserStoreError::UserNotFound) => {
                tracing::warn!("user not found");
                return Err(AuthError::UserNotFound);
            }
            Err(e) => return Err(internal(OP, e)),
        };

        tracing::info!(is_admin, "checked if user is admin");

        Ok(is_admin)
    }
}
