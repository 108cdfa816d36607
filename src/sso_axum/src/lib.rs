//! Axum transport for the SSO auth engine.
//!
//! Routes are generic over any [`sso_core::Authenticator`]. They check that
//! required fields are present, call the engine and translate
//! [`sso_core::AuthError`] kinds into HTTP status codes.
//!
//! # Usage
//!
//! ```ignore
//! use axum::{Router, routing::post};
//! use sso_axum::routes;
//!
//! let app = Router::new()
//!     .route("/login", post(routes::login::<Engine>))
//!     .route("/register", post(routes::register::<Engine>))
//!     .route("/is-admin", post(routes::is_admin::<Engine>))
//!     .with_state(engine);
//! ```

pub mod error;
pub mod routes;

pub use error::{ApiError, ErrorResponse};
