use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{DeleteResponse, HealthResponse, Item, ItemPayload, RootResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Simple API",
        version = "1.0.0",
        description = "Una API simple para demostrar containerización y despliegue en AWS"
    ),
    paths(
        handlers::root::root_handler,
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Item,
            ItemPayload,
            RootResponse,
            HealthResponse,
            DeleteResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "status", description = "Service status operations"),
        (name = "items", description = "Item collection operations")
    )
)]
pub struct ApiDoc;
