//! Health check endpoint

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        gateway_url: state.gateway.initiate_url().to_string(),
    }))
}
