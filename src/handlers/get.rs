use crate::error::{ApiError, ErrorResponse};
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode, Json};

/// GET /items/:item_id handler - Retrieve a single item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("item_id" = u64, Path, description = "Server-assigned item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "item_id is not an integer", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    // Parse and validate the path id
    let item_id: u64 = item_id
        .parse()
        .map_err(|_| ApiError::Validation(format!("item_id must be an integer, got '{item_id}'")))?;

    match state.store.get(item_id) {
        Some(item) => {
            tracing::info!("Successfully retrieved item with id: {}", item_id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Item not found with id: {}", item_id);
            Err(ApiError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ItemStore;
    use axum::{body::Body, http::Request, routing::get, routing::post, Router};
    use tower::ServiceExt;

    // POST handler needed to seed the store through the API
    use crate::handlers::create::create_handler;

    fn setup_test_app() -> Router {
        let state = AppState {
            store: ItemStore::new(),
        };

        Router::new()
            .route(crate::routes::ITEMS, post(create_handler))
            .route(crate::routes::ITEM, get(get_handler))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_get_endpoint_success() {
        let app = setup_test_app();

        let test_payload = serde_json::json!({"name": "Widget", "price": 9.99});

        // First, create the item
        let create_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&test_payload).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(create_response.status(), StatusCode::OK);

        // Now, fetch it back
        let get_response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/items/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(get_response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(get_response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            response_json,
            serde_json::json!({
                "id": 1,
                "name": "Widget",
                "description": null,
                "price": 9.99,
                "is_available": true
            })
        );
    }

    #[tokio::test]
    async fn test_get_endpoint_not_found() {
        let app = setup_test_app();

        // Try to fetch an id that was never assigned
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/items/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_response.detail, "Item no encontrado");
    }

    #[tokio::test]
    async fn test_get_endpoint_non_integer_id() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/items/not-a-number")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.detail.contains("must be an integer"));
        assert!(error_response.detail.contains("not-a-number"));
    }

    #[tokio::test]
    async fn test_get_endpoint_negative_id() {
        let app = setup_test_app();

        // u64 parsing rejects the sign, so this is a validation error,
        // not a not-found
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/items/-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
