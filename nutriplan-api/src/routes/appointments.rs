//! Appointment endpoints

use axum::{extract::Path, Json};
use nutriplan_core::fixtures;
use nutriplan_core::Appointment;

use crate::error::{ApiError, ApiResult};

/// List all appointments
pub async fn list_appointments() -> Json<Vec<Appointment>> {
    Json(fixtures::appointments())
}

/// Get a single appointment
pub async fn get_appointment(
    Path(appointment_id): Path<String>,
) -> ApiResult<Json<Appointment>> {
    fixtures::appointment(&appointment_id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("appointment not found: {}", appointment_id)))
}
