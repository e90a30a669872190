use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::types::UserActionDto;
use super::{ApiError, AppState};
use crate::db::HISTORY_WINDOW;

/// GET /history/{username}
/// Most recent first, capped at the fixed history window. An unknown
/// username is an empty history, not an error.
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<Vec<UserActionDto>>, ApiError> {
    let entries = state
        .store
        .recent_actions_for_user(&username, HISTORY_WINDOW)
        .await?;

    Ok(Json(entries.into_iter().map(UserActionDto::from).collect()))
}
