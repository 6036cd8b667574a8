//! Dashboard user endpoints

use axum::{extract::Path, Json};
use nutriplan_core::fixtures;
use nutriplan_core::User;

use crate::error::{ApiError, ApiResult};

/// List dashboard users
pub async fn list_users() -> Json<Vec<User>> {
    Json(fixtures::users())
}

/// Get a single user
pub async fn get_user(Path(user_id): Path<String>) -> ApiResult<Json<User>> {
    fixtures::user(&user_id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("user not found: {}", user_id)))
}
