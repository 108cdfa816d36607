use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use sso_core::{Authenticator, UserId};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct IsAdminRequest {
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IsAdminResponse {
    pub is_admin: bool,
}

#[tracing::instrument(name = "IsAdmin", skip_all)]
pub async fn is_admin<S>(
    State(auth): State<S>,
    Json(request): Json<IsAdminRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: Authenticator,
{
    let user_id: UserId = request.user_id.parse()?;

    let is_admin = auth.is_admin(user_id).await?;

    Ok((StatusCode::OK, Json(IsAdminResponse { is_admin })))
}
