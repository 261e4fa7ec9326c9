use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "redis-cache-kv API",
        version = "1.0.0",
        description = "A plain-text key-value cache backed by Redis"
    ),
    paths(
        handlers::health::health_handler,
        handlers::put::put_handler,
        handlers::get::get_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "cache", description = "Key-value cache operations")
    )
)]
pub struct ApiDoc;
