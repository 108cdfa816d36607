use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use sso_core::{AuthError, UserError, UserIdError};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("invalid app id")]
    InvalidApp,

    #[error("user not found")]
    UserNotFound,

    #[error("request cancelled")]
    Cancelled,

    #[error("internal error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) | ApiError::InvalidApp => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::UserAlreadyExists => StatusCode::CONFLICT,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::Cancelled => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (self.status_code(), body).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::UserExists => ApiError::UserAlreadyExists,
            AuthError::AppNotFound => ApiError::InvalidApp,
            AuthError::UserNotFound => ApiError::UserNotFound,
            AuthError::Cancelled { .. } => ApiError::Cancelled,
            AuthError::Internal { .. } => ApiError::Internal,
        }
    }
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        match error {
            UserError::InvalidEmail => ApiError::InvalidInput("email is required"),
            UserError::InvalidPassword => ApiError::InvalidInput("password is required"),
        }
    }
}

impl From<UserIdError> for ApiError {
    fn from(error: UserIdError) -> Self {
        match error {
            UserIdError::Empty => ApiError::InvalidInput("user_id is required"),
            UserIdError::Malformed => ApiError::InvalidInput("invalid user_id"),
        }
    }
}
