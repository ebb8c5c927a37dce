use crate::error::{ApiError, ErrorResponse};
use crate::models::{Item, ItemPayload};
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, extract::Path, http::StatusCode, Json};

/// PUT /items/:item_id handler - Replace an item
///
/// Full replacement, not a patch: fields omitted from the body fall back
/// to their payload defaults (`description` to null, `is_available` to
/// true). The id is taken from the path and never changes. The body is
/// validated before the id is looked up, so a bad payload is a 422 even
/// when the item does not exist.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("item_id" = u64, Path, description = "Server-assigned item id")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item replaced", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Invalid path id or body", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    // Parse and validate the path id
    let item_id: u64 = item_id
        .parse()
        .map_err(|_| ApiError::Validation(format!("item_id must be an integer, got '{item_id}'")))?;

    let Json(payload) = payload?;

    match state.store.update(item_id, payload) {
        Some(item) => {
            tracing::info!("Successfully updated item with id: {}", item_id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Item not found with id: {}", item_id);
            Err(ApiError::NotFound)
        }
    }
}
