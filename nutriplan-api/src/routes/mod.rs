//! API route handlers

pub mod appointments;
pub mod clients;
pub mod foods;
pub mod health;
pub mod payments;
pub mod plans;
pub mod recipes;
pub mod reports;
pub mod users;

use axum::{routing::get, routing::post, Router};

use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(health::health_check))
        // Client endpoints
        .route("/clients", get(clients::list_clients))
        .route("/clients/:client_id", get(clients::get_client))
        .route(
            "/clients/:client_id/appointments",
            get(clients::list_client_appointments),
        )
        .route("/clients/:client_id/plans", get(clients::list_client_plans))
        .route(
            "/clients/:client_id/reports",
            get(clients::list_client_reports),
        )
        // Appointment endpoints
        .route("/appointments", get(appointments::list_appointments))
        .route(
            "/appointments/:appointment_id",
            get(appointments::get_appointment),
        )
        // Diet plan endpoints
        .route("/plans", get(plans::list_plans))
        .route("/plans/:plan_id", get(plans::get_plan))
        // Reference data endpoints
        .route("/foods", get(foods::list_foods))
        .route("/foods/:food_id", get(foods::get_food))
        .route("/recipes", get(recipes::list_recipes))
        .route("/recipes/:recipe_id", get(recipes::get_recipe))
        // Report endpoints
        .route("/reports", get(reports::list_reports))
        .route("/reports/:report_id", get(reports::get_report))
        // User endpoints
        .route("/users", get(users::list_users))
        .route("/users/:user_id", get(users::get_user))
        // Payment proxy
        .route("/payments/initiate", post(payments::initiate_payment))
        // State
        .with_state(state)
}
