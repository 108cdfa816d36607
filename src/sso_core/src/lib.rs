pub mod domain;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    app::{App, AppId},
    auth_error::AuthError,
    email::Email,
    hashed_password::HashedPassword,
    password::Password,
    session_token::SessionToken,
    user::{User, UserError},
    user_id::{UserId, UserIdError},
};

pub use ports::{
    repositories::{AppRegistry, AppRegistryError, UserStore, UserStoreError},
    services::{CredentialHasher, HasherError, TokenIssuer, TokenIssuerError},
};

pub use strategies::authenticator::Authenticator;
