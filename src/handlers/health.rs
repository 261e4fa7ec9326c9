use crate::error::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Redis liveness probe
///
/// One PING per request. 503 carries the store error so an operator can see
/// why the probe failed.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Redis answered PING", body = HealthResponse),
        (status = 503, description = "Redis did not answer PING", body = UnhealthyResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<UnhealthyResponse>)> {
    state
        .store
        .health_check()
        .await
        .map(|()| {
            Json(HealthResponse {
                status: "healthy".to_string(),
            })
        })
        .map_err(|e| {
            tracing::warn!("Redis PING failed: {:#}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(UnhealthyResponse {
                    status: "unhealthy".to_string(),
                    error: format!("Cannot connect to Redis: {:#}", e),
                }),
            )
        })
}
