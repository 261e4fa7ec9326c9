use crate::error::{ApiError, ErrorResponse};
use crate::models::value_text;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode};

/// GET /cache/{key} handler - Retrieve a value
///
/// A key that was never written answers 200 with the literal `null`
/// rather than 404.
#[utoipa::path(
    get,
    path = routes::CACHE_ITEM,
    params(
        ("key" = String, Path, description = "Key to look up")
    ),
    responses(
        (status = 200, description = "Stored value, or `null` if the key is absent", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "cache"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<(StatusCode, String), ApiError> {
    match state.store.get(&key).await {
        Ok(value) => {
            tracing::info!("Retrieved key: {} (found: {})", key, value.is_some());
            Ok((StatusCode::OK, value_text(value)))
        }
        Err(e) => {
            tracing::error!("Failed to retrieve key {}: {:#}", key, e);
            Err(e.into())
        }
    }
}
