// Route path constants - single source of truth for all API paths

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const ITEMS: &str = "/items";
pub const ITEM: &str = "/items/{item_id}";

/// Build the full application router
///
/// Swagger UI is mounted at /docs with the OpenAPI document at
/// /openapi.json, and every request is traced.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(ROOT, get(handlers::root_handler))
        .route(HEALTH, get(handlers::health_handler))
        .route(
            ITEMS,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
