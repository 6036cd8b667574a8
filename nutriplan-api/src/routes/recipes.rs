//! Recipe endpoints

use axum::{extract::Path, Json};
use nutriplan_core::fixtures;
use nutriplan_core::Recipe;

use crate::error::{ApiError, ApiResult};

/// List all recipes
pub async fn list_recipes() -> Json<Vec<Recipe>> {
    Json(fixtures::recipes())
}

/// Get a single recipe
pub async fn get_recipe(Path(recipe_id): Path<String>) -> ApiResult<Json<Recipe>> {
    fixtures::recipe(&recipe_id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("recipe not found: {}", recipe_id)))
}
