use crate::error::{ApiError, ErrorResponse};
use crate::models::STORED;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode};

/// POST /cache/{key}/{value} handler - Store a value
///
/// Both key and value come verbatim from the path. Whatever the key held
/// before is overwritten.
#[utoipa::path(
    post,
    path = routes::CACHE_PUT,
    params(
        ("key" = String, Path, description = "Key to store the value under"),
        ("value" = String, Path, description = "Value to store")
    ),
    responses(
        (status = 200, description = "Value stored", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "cache"
)]
pub async fn put_handler(
    State(state): State<AppState>,
    Path((key, value)): Path<(String, String)>,
) -> Result<(StatusCode, &'static str), ApiError> {
    if let Err(e) = state.store.set(&key, &value).await {
        tracing::error!("Failed to store key {}: {:#}", key, e);
        return Err(e.into());
    }

    tracing::info!("Successfully stored key: {}", key);
    Ok((StatusCode::OK, STORED))
}
