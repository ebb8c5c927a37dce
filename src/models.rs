use serde::{Deserialize, Serialize};

/// A stored item record, including its server-assigned id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_available: bool,
}

/// Request body for create and update operations
///
/// The id is never taken from the client: create assigns the next counter
/// value and update keeps the id in the path. An `id` field in the body is
/// ignored. `is_available` defaults to true when omitted.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ItemPayload {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    #[serde(default = "default_availability")]
    pub is_available: bool,
}

fn default_availability() -> bool {
    true
}

/// Response type for the root greeting endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Confirmation returned by successful delete operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}
