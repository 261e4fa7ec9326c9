// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const CACHE_ITEM: &str = "/cache/{key}";
pub const CACHE_PUT: &str = "/cache/{key}/{value}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
