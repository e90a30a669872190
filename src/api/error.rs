use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

use crate::services::AccountError;
use crate::sieve::SieveError;

/// The single structured error shape every failure renders as.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    InvalidInput(String),

    DuplicateUsername(String),

    InvalidCredentials(String),

    StoreFailure(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::DuplicateUsername(msg) | Self::InvalidCredentials(msg) => write!(f, "{msg}"),
            Self::StoreFailure(msg) => write!(f, "Store failure: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "invalid_input", msg),
            Self::DuplicateUsername(msg) => (StatusCode::BAD_REQUEST, "duplicate_username", msg),
            Self::InvalidCredentials(msg) => (StatusCode::UNAUTHORIZED, "invalid_credentials", msg),
            Self::StoreFailure(msg) => {
                tracing::error!("Store failure: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "store_failure", msg)
            }
        };

        (status, Json(ErrorBody { code, message })).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidInput(msg) => Self::InvalidInput(msg),
            AccountError::DuplicateUsername => Self::DuplicateUsername(err.to_string()),
            AccountError::InvalidCredentials => Self::InvalidCredentials(err.to_string()),
            AccountError::Store(msg) => Self::StoreFailure(msg),
        }
    }
}

impl From<SieveError> for ApiError {
    fn from(err: SieveError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::StoreFailure(err.to_string())
    }
}
