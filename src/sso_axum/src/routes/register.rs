use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use sso_core::Authenticator;

use super::{parse_email, parse_password};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_id: String,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<S>(
    State(auth): State<S>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: Authenticator,
{
    let email = parse_email(request.email)?;
    let password = parse_password(request.password)?;

    let user_id = auth.register_new_user(email, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id: user_id.to_string(),
        }),
    ))
}
