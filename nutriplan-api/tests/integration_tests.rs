//! Integration tests for the NutriPlan API resource endpoints
//!
//! These verify the read-only fixture endpoints: stable collections,
//! by-id lookups, and 404 envelopes for unknown ids.

use axum_test::TestServer;
use nutriplan_api::{create_router, start_background_server, ApiConfig, AppState};
use serde_json::Value;

/// Create test server (the gateway URL is never dialed by these tests)
fn create_test_server() -> TestServer {
    let config = ApiConfig {
        gateway_url: "http://127.0.0.1:1/unused".to_string(),
        ..Default::default()
    };
    let state = AppState::new(&config);
    let router = create_router(state);
    TestServer::new(router).unwrap()
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["gateway_url"], "http://127.0.0.1:1/unused");
}

#[tokio::test]
async fn test_background_server_serves_health() {
    let config = ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        gateway_url: "http://127.0.0.1:1/unused".to_string(),
        ..Default::default()
    };

    let addr = start_background_server(&config).await.unwrap();

    let body: Value = reqwest::get(format!("http://{}/health", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "healthy");
}

// ============ Client Endpoint Tests ============

#[tokio::test]
async fn test_list_clients() {
    let server = create_test_server();

    let response = server.get("/clients").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let clients = body.as_array().expect("array response");
    assert_eq!(clients.len(), 4);
    assert_eq!(clients[0]["client_id"], "cli_001");
    assert_eq!(clients[0]["status"], "active");
}

#[tokio::test]
async fn test_get_client() {
    let server = create_test_server();

    let response = server.get("/clients/cli_002").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["full_name"], "João Ferreira");
}

#[tokio::test]
async fn test_get_client_not_found() {
    let server = create_test_server();

    let response = server.get("/clients/cli_999").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["error"].as_str().unwrap().contains("cli_999"));
}

#[tokio::test]
async fn test_client_sublists() {
    let server = create_test_server();

    let response = server.get("/clients/cli_001/appointments").await;
    response.assert_status_ok();
    let appointments: Value = response.json();
    assert_eq!(appointments.as_array().unwrap().len(), 2);

    let response = server.get("/clients/cli_001/plans").await;
    response.assert_status_ok();
    let plans: Value = response.json();
    assert_eq!(plans.as_array().unwrap().len(), 1);
    assert_eq!(plans[0]["plan_id"], "pln_001");

    let response = server.get("/clients/cli_001/reports").await;
    response.assert_status_ok();
    let reports: Value = response.json();
    assert_eq!(reports.as_array().unwrap().len(), 2);

    // Unknown client id yields an empty list, not a 404
    let response = server.get("/clients/cli_999/appointments").await;
    response.assert_status_ok();
    let empty: Value = response.json();
    assert!(empty.as_array().unwrap().is_empty());
}

// ============ Fixture Stability Tests ============

#[tokio::test]
async fn test_collections_identical_across_calls() {
    let server = create_test_server();

    for path in [
        "/clients",
        "/appointments",
        "/plans",
        "/foods",
        "/recipes",
        "/reports",
        "/users",
    ] {
        let first: Value = server.get(path).await.json();
        let second: Value = server.get(path).await.json();
        assert_eq!(first, second, "{} changed between calls", path);
        assert!(!first.as_array().unwrap().is_empty(), "{} is empty", path);
    }
}

// ============ Reference Data Tests ============

#[tokio::test]
async fn test_get_food() {
    let server = create_test_server();

    let response = server.get("/foods/food_004").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Olive oil, extra virgin");
    assert_eq!(body["kcal_per_100g"], 884);
}

#[tokio::test]
async fn test_get_recipe_ingredients_reference_foods() {
    let server = create_test_server();

    let recipe: Value = server.get("/recipes/rcp_001").await.json();
    let foods: Value = server.get("/foods").await.json();
    let food_ids: Vec<&str> = foods
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["food_id"].as_str().unwrap())
        .collect();

    for ingredient in recipe["ingredients"].as_array().unwrap() {
        let food_id = ingredient["food_id"].as_str().unwrap();
        assert!(food_ids.contains(&food_id));
    }
}

// ============ Appointment / Plan / Report / User Tests ============

#[tokio::test]
async fn test_get_appointment() {
    let server = create_test_server();

    let response = server.get("/appointments/apt_003").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["client_id"], "cli_002");
    assert_eq!(body["kind"], "initial");
}

#[tokio::test]
async fn test_get_plan_not_found() {
    let server = create_test_server();

    let response = server.get("/plans/pln_999").await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_report() {
    let server = create_test_server();

    let response = server.get("/reports/rpt_002").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["adherence_pct"], 92);
}

#[tokio::test]
async fn test_list_users() {
    let server = create_test_server();

    let response = server.get("/users").await;
    response.assert_status_ok();
    let body: Value = response.json();
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0]["role"], "dietitian");
}
