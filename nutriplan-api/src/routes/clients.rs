//! Client endpoints
//!
//! Detail routes return 404 for unknown ids; the per-client sub-lists
//! return an empty collection instead, matching list semantics.

use axum::{extract::Path, Json};
use nutriplan_core::fixtures;
use nutriplan_core::{Appointment, Client, DietPlan, Report};

use crate::error::{ApiError, ApiResult};

/// List all clients
pub async fn list_clients() -> Json<Vec<Client>> {
    Json(fixtures::clients())
}

/// Get a single client
pub async fn get_client(Path(client_id): Path<String>) -> ApiResult<Json<Client>> {
    fixtures::client(&client_id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("client not found: {}", client_id)))
}

/// List appointments for a client
pub async fn list_client_appointments(
    Path(client_id): Path<String>,
) -> Json<Vec<Appointment>> {
    Json(fixtures::appointments_for_client(&client_id))
}

/// List diet plans for a client
pub async fn list_client_plans(Path(client_id): Path<String>) -> Json<Vec<DietPlan>> {
    Json(fixtures::diet_plans_for_client(&client_id))
}

/// List progress reports for a client
pub async fn list_client_reports(Path(client_id): Path<String>) -> Json<Vec<Report>> {
    Json(fixtures::reports_for_client(&client_id))
}
