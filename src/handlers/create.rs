use crate::error::{ApiError, ErrorResponse};
use crate::models::{Item, ItemPayload};
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

/// POST /items handler - Create a new item
///
/// The store assigns the next counter value as the id; any `id` field in
/// the request body is ignored. The body extractor is taken as a Result so
/// malformed or incomplete payloads surface as a 422 with the violation in
/// the detail field.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item created with a server-assigned id", body = Item),
        (status = 422, description = "Missing, mistyped, or malformed body", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(payload) = payload?;

    let item = state.store.insert(payload);

    tracing::info!("Successfully created item with id: {}", item.id);
    Ok((StatusCode::OK, Json(item)))
}
