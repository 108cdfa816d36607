use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use sso_core::{AppId, Authenticator};

use super::{parse_email, parse_password};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
    #[serde(default)]
    pub app_id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S>(
    State(auth): State<S>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: Authenticator,
{
    let email = parse_email(request.email)?;
    let password = parse_password(request.password)?;
    let app_id = AppId::new(request.app_id);
    if app_id.is_empty() {
        return Err(ApiError::InvalidInput("app_id is required"));
    }

    let token = auth.login(email, password, app_id).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            token: token.into_string(),
        }),
    ))
}
