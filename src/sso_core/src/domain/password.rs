use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// A plaintext password on its way to the hasher. Never persisted.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(UserError::InvalidPassword);
        }
        Ok(Self(value))
    }
}
