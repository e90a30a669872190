use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::sieve;

/// GET /primes/{limit}
/// Pure computation; nothing is written to the action log.
pub async fn get_primes(Path(limit): Path<i64>) -> Result<Json<Vec<u32>>, ApiError> {
    let primes = sieve::find_primes(limit)?;
    Ok(Json(primes))
}

/// GET /primes/{username}/{limit}
/// Same computation, recorded against the named user. The log write is
/// attempted only after the sieve succeeds, but the two are not one
/// transaction.
pub async fn get_primes_for_user(
    State(state): State<Arc<AppState>>,
    Path((username, limit)): Path<(String, i64)>,
) -> Result<Json<Vec<u32>>, ApiError> {
    let primes = sieve::find_primes(limit)?;

    state
        .store
        .append_action(&username, "GetPrimes", Some(format!("limit={limit}")))
        .await?;

    Ok(Json(primes))
}
