use crate::models::HealthResponse;
use crate::routes;
use axum::Json;

/// GET /health handler - Health check endpoint
///
/// The service holds no external connections, so the check has nothing to
/// probe and always reports healthy.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "status"
)]
pub async fn health_handler() -> Json<HealthResponse> {
    tracing::debug!("Health check passed");
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "Simple API".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = Router::new().route(crate::routes::HEALTH, get(health_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "healthy");
        assert_eq!(response_json.service, "Simple API");
    }
}
