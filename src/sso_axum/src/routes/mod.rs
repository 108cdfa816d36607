//! Axum-specific route handlers.

pub mod is_admin;
pub mod login;
pub mod register;

pub use is_admin::is_admin;
pub use login::login;
pub use register::register;

use secrecy::Secret;
use sso_core::{Email, Password, UserError};

use crate::error::ApiError;

// Missing and empty fields are reported the same way.
fn parse_email(raw: Option<Secret<String>>) -> Result<Email, ApiError> {
    let raw = raw.ok_or(UserError::InvalidEmail)?;
    Ok(Email::try_from(raw)?)
}

fn parse_password(raw: Option<Secret<String>>) -> Result<Password, ApiError> {
    let raw = raw.ok_or(UserError::InvalidPassword)?;
    Ok(Password::try_from(raw)?)
}
