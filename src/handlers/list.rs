use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /items handler - List all items
///
/// Returns every stored item as a bare JSON array, oldest first. Deleting
/// an item removes it from this listing but leaves the others in their
/// original insertion order.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All stored items in insertion order", body = [Item])
    ),
    tag = "items"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Item>>) {
    let items = state.store.list();

    tracing::info!("Listed {} items", items.len());

    (StatusCode::OK, Json(items))
}
