//! Diet plan endpoints

use axum::{extract::Path, Json};
use nutriplan_core::fixtures;
use nutriplan_core::DietPlan;

use crate::error::{ApiError, ApiResult};

/// List all diet plans
pub async fn list_plans() -> Json<Vec<DietPlan>> {
    Json(fixtures::diet_plans())
}

/// Get a single diet plan
pub async fn get_plan(Path(plan_id): Path<String>) -> ApiResult<Json<DietPlan>> {
    fixtures::diet_plan(&plan_id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("plan not found: {}", plan_id)))
}
