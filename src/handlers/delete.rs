use crate::error::{ApiError, ErrorResponse};
use crate::models::DeleteResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode, Json};

/// DELETE /items/:item_id handler - Remove an item
///
/// Removal is permanent and the id is never reassigned to a later create.
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("item_id" = u64, Path, description = "Server-assigned item id")
    ),
    responses(
        (status = 200, description = "Item removed", body = DeleteResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "item_id is not an integer", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<(StatusCode, Json<DeleteResponse>), ApiError> {
    // Parse and validate the path id
    let item_id: u64 = item_id
        .parse()
        .map_err(|_| ApiError::Validation(format!("item_id must be an integer, got '{item_id}'")))?;

    match state.store.remove(item_id) {
        Some(_) => {
            tracing::info!("Successfully deleted item with id: {}", item_id);
            Ok((
                StatusCode::OK,
                Json(DeleteResponse {
                    message: "Item eliminado correctamente".to_string(),
                }),
            ))
        }
        None => {
            tracing::info!("Item not found with id: {}", item_id);
            Err(ApiError::NotFound)
        }
    }
}
