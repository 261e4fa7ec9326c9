use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Build the application router with every route registered explicitly
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::CACHE_ITEM, get(handlers::get_handler))
        .route(routes::CACHE_PUT, post(handlers::put_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
