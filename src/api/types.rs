use serde::{Deserialize, Serialize};

use crate::entities::user_actions;

/// Shared body for register and login. Field names are PascalCase for
/// compatibility with existing clients.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(rename = "Username")]
    pub username: String,

    #[serde(rename = "Password")]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ready: bool,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct UserActionDto {
    #[serde(rename = "ActionType")]
    pub action_type: String,

    #[serde(rename = "Details")]
    pub details: String,

    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

impl From<user_actions::Model> for UserActionDto {
    fn from(model: user_actions::Model) -> Self {
        Self {
            action_type: model.action_type,
            details: model.details.unwrap_or_default(),
            timestamp: model.timestamp,
        }
    }
}
