use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::jwt::{issue_token, AuthUser};
use crate::auth::password::verify_password;
use crate::auth::users::find_by_username;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub username: String,
    pub role: String,
}

/// POST /api/v1/auth/login
/// Unknown usernames and bad passwords get the same 401, no distinction.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = find_by_username(&state.db, &req.username)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let valid = verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(AppError::Unauthorized);
    }

    let token = issue_token(&user, &state.config.jwt_secret, state.config.token_ttl_hours)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("token issuance failed: {e}")))?;

    tracing::info!(username = %user.username, "login successful");
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        user: UserInfo {
            username: user.username,
            role: user.role,
        },
    }))
}

/// POST /api/v1/auth/logout
/// Token disposal is client-side; this just confirms the token was valid.
pub async fn handle_logout(AuthUser(_user): AuthUser) -> Json<serde_json::Value> {
    Json(json!({ "message": "Logout successful" }))
}

/// GET /api/v1/auth/me
pub async fn handle_me(AuthUser(user): AuthUser) -> Json<UserInfo> {
    Json(UserInfo {
        username: user.username,
        role: user.role,
    })
}
