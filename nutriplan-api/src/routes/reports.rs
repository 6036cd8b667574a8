//! Progress report endpoints

use axum::{extract::Path, Json};
use nutriplan_core::fixtures;
use nutriplan_core::Report;

use crate::error::{ApiError, ApiResult};

/// List all progress reports
pub async fn list_reports() -> Json<Vec<Report>> {
    Json(fixtures::reports())
}

/// Get a single report
pub async fn get_report(Path(report_id): Path<String>) -> ApiResult<Json<Report>> {
    fixtures::report(&report_id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("report not found: {}", report_id)))
}
