use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type, `{"detail": ...}` on the wire
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Custom error type for API endpoints
///
/// This error type provides consistent error handling across all endpoints,
/// mapping each error kind to its HTTP status code and formatting it as a
/// JSON `{"detail": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    /// No item with the requested id exists
    NotFound,
    /// Request body or path parameter failed validation
    Validation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Item no encontrado".to_string()),
            ApiError::Validation(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
        };

        let body = Json(ErrorResponse { detail });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}
