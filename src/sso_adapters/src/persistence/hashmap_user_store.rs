use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use sso_core::{Email, HashedPassword, User, UserId, UserStore, UserStoreError};

#[derive(Default)]
struct Users {
    by_id: HashMap<UserId, User>,
    by_email: HashMap<Email, UserId>,
}

/// In-memory user store. Both indexes change under a single write lock, so
/// the email uniqueness check and the insert are atomic.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<Users>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant or revoke admin rights. Not reachable through the auth engine.
    pub async fn set_admin(&self, user_id: UserId, is_admin: bool) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users
            .by_id
            .get_mut(&user_id)
            .ok_or(UserStoreError::UserNotFound)?;
        user.set_admin(is_admin);
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn save_user(
        &self,
        email: Email,
        password_hash: HashedPassword,
    ) -> Result<UserId, UserStoreError> {
        let mut users = self.users.write().await;
        if users.by_email.contains_key(&email) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let user_id = UserId::new();
        users.by_email.insert(email.clone(), user_id);
        users
            .by_id
            .insert(user_id, User::new(user_id, email, password_hash, false));
        Ok(user_id)
    }

    async fn user_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .by_email
            .get(email)
            .and_then(|user_id| users.by_id.get(user_id))
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, UserStoreError> {
        let users = self.users.read().await;
        users
            .by_id
            .get(&user_id)
            .map(User::is_admin)
            .ok_or(UserStoreError::UserNotFound)
    }
}
