use axum::{extract::State, http::StatusCode, Json};
use bandtrack_db::entities::UserView;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

// ─── Request/Response DTOs ──────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub user: UserView,
}

// ─── Handlers ──────────────────────────────────────────────────────

/// POST /register
pub async fn register(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let username = body.username.trim();
    if username.is_empty() {
        return Err(ApiError::validation("Username is required"));
    }
    if body.password.trim().is_empty() {
        return Err(ApiError::validation("Password is required"));
    }

    let mut store = state.store.write().await;
    let user = store.register_user(username, &body.password)?;
    tracing::info!(user_id = user.id, username = %user.username, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered",
            user: user.view(),
        }),
    ))
}

/// POST /login
///
/// No token is issued; callers send the returned id back on later requests.
/// The username is trimmed the same way `register` stores it.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let store = state.store.read().await;
    let user = store
        .authenticate(body.username.trim(), &body.password)
        .ok_or(ApiError::InvalidCredentials)?;

    tracing::debug!(user_id = user.id, "login successful");

    Ok(Json(AuthResponse {
        message: "Login successful",
        user: user.view(),
    }))
}
