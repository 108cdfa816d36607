use std::fmt::Display;

use sso_core::{AuthError, HasherError};

/// Log an unexpected collaborator failure and collapse it into `Internal`.
pub(crate) fn internal(op: &'static str, error: impl Display) -> AuthError {
    tracing::error!(op, error = %error, "unexpected failure");
    AuthError::Internal { op }
}

pub(crate) fn from_hasher(op: &'static str, error: HasherError) -> AuthError {
    match error {
        HasherError::Cancelled => {
            tracing::warn!(op, "password hashing cancelled");
            AuthError::Cancelled { op }
        }
        other => internal(op, other),
    }
}
