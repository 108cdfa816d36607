use thiserror::Error;

/// Failure kinds surfaced by the auth engine.
///
/// Each failure is classified exactly once. Transports map these kinds to
/// their own status codes; `Internal` carries only the operation name, the
/// underlying cause is logged where it happens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password. The two cases are deliberately
    /// indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user already exists")]
    UserExists,

    /// Unknown or empty app id.
    #[error("app not found")]
    AppNotFound,

    #[error("user not found")]
    UserNotFound,

    #[error("{op}: operation cancelled")]
    Cancelled { op: &'static str },

    #[error("{op}: internal error")]
    Internal { op: &'static str },
}
