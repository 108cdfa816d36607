//! # SSO - Multi-tenant Authentication Library
//!
//! Facade crate re-exporting the public APIs of the sso workspace: the
//! domain model, the auth engine, storage and crypto adapters, and the HTTP
//! service.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `UserId`, `App`, `AuthError`
//! - **Ports**: `UserStore`, `AppRegistry`, `CredentialHasher`, `TokenIssuer`
//! - **Engine**: `AuthEngine` and the `Login`/`Register`/`IsAdmin` use cases
//! - **Adapters**: `Argon2Hasher`, `JwtTokenIssuer`, in-memory and PostgreSQL stores
//! - **Service**: `AuthService`, the axum front for any `Authenticator`

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use sso_core::*;
}

pub use sso_core::{
    App, AppId, AuthError, Authenticator, Email, HashedPassword, Password, SessionToken, User,
    UserError, UserId, UserIdError,
};

// ============================================================================
// Ports
// ============================================================================

/// Storage and crypto seams
pub mod ports {
    pub use sso_core::{
        AppRegistry, AppRegistryError, CredentialHasher, HasherError, TokenIssuer,
        TokenIssuerError, UserStore, UserStoreError,
    };
}

pub use ports::{AppRegistry, CredentialHasher, TokenIssuer, UserStore};

// ============================================================================
// Engine (Application Layer)
// ============================================================================

pub use sso_application::{AuthEngine, IsAdminUseCase, LoginUseCase, RegisterUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use sso_axum::{error::*, routes::*};
    }

    /// Persistence implementations
    pub mod persistence {
        pub use sso_adapters::persistence::*;
    }

    /// Password hashing and session tokens
    pub mod auth {
        pub use sso_adapters::authentication::*;
    }

    /// Configuration
    pub mod config {
        pub use sso_adapters::config::*;
    }
}

pub use sso_adapters::{
    Argon2Hasher, JwtTokenIssuer, authentication::verify_session_token,
    persistence::{HashMapAppRegistry, HashMapUserStore, PostgresAppRegistry, PostgresUserStore},
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

pub use sso_service::{AuthService, get_postgres_pool, seed_apps};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
