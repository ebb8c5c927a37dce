use crate::models::RootResponse;
use crate::routes;
use axum::Json;

/// GET / handler - Root greeting endpoint
///
/// Returns a static payload confirming the service is running. No side
/// effects, never fails.
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service is running", body = RootResponse)
    ),
    tag = "status"
)]
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "¡API funcionando correctamente!".to_string(),
        status: "healthy".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_root_endpoint() {
        let app = Router::new().route(crate::routes::ROOT, get(root_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: RootResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.message, "¡API funcionando correctamente!");
        assert_eq!(response_json.status, "healthy");
    }
}
