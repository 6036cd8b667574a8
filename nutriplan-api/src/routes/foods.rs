//! Food reference endpoints

use axum::{extract::Path, Json};
use nutriplan_core::fixtures;
use nutriplan_core::Food;

use crate::error::{ApiError, ApiResult};

/// List the food reference table
pub async fn list_foods() -> Json<Vec<Food>> {
    Json(fixtures::foods())
}

/// Get a single food entry
pub async fn get_food(Path(food_id): Path<String>) -> ApiResult<Json<Food>> {
    fixtures::food(&food_id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("food not found: {}", food_id)))
}
