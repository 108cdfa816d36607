use thiserror::Error;

use super::{email::Email, hashed_password::HashedPassword, user_id::UserId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("email is required")]
    InvalidEmail,
    #[error("password is required")]
    InvalidPassword,
}

/// A stored user. The plaintext password never reaches this type.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    email: Email,
    password_hash: HashedPassword,
    is_admin: bool,
}

impl User {
    pub fn new(id: UserId, email: Email, password_hash: HashedPassword, is_admin: bool) -> Self {
        Self {
            id,
            email,
            password_hash,
            is_admin,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn set_admin(&mut self, is_admin: bool) {
        self.is_admin = is_admin;
    }
}
