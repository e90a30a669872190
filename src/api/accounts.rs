use axum::{Json, extract::State};
use std::sync::Arc;

use super::types::{CredentialsRequest, LoginResponse, MessageResponse};
use super::{ApiError, AppState};

/// POST /register
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let account = state
        .accounts
        .register(&payload.username, &payload.password)
        .await?;

    tracing::info!("Registered user: {}", account.username);

    state
        .store
        .append_action(&account.username, "Register", Some("User registered".to_string()))
        .await?;

    Ok(Json(MessageResponse {
        message: "User registered successfully".to_string(),
    }))
}

/// POST /login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let username = state
        .accounts
        .authenticate(&payload.username, &payload.password)
        .await?;

    state
        .store
        .append_action(&username, "Login", Some("User logged in".to_string()))
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        username,
    }))
}
