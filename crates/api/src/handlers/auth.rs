//! Handler for `/admin/auth`.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tailwag_core::error::CoreError;
use tailwag_core::roles::ROLE_ADMIN;

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::response::AuthTokenResponse;
use crate::state::AppState;

/// Request body for `POST /admin/auth`. Missing fields count as a mismatch.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/admin/auth
///
/// Exchange the admin username and password for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<LoginRequest>,
) -> AppResult<Json<AuthTokenResponse>> {
    if !state.credentials.verify(&input.username, &input.password) {
        tracing::warn!(username = %input.username, "Rejected admin sign-in");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let token = generate_access_token(&input.username, ROLE_ADMIN, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(username = %input.username, "Admin signed in");

    Ok(Json(AuthTokenResponse {
        success: true,
        token,
    }))
}
