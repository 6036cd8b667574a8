//! Integration tests for the payment initiation proxy
//!
//! A stub downstream gateway runs on an ephemeral port so each branch of
//! the relay contract can be exercised over real HTTP: verbatim 2xx
//! passthrough, non-2xx error envelopes with the status preserved, and the
//! connection-failure envelope when nothing answers.

use axum::http::{header, StatusCode};
use axum::{routing::post, Router};
use axum_test::TestServer;
use nutriplan_api::{create_router, ApiConfig, AppState};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;

const ACCEPTED_BODY: &str = r#"{"success":true,"payment_id":"pay_8841","checkout_url":"https://gateway.example/checkout/pay_8841"}"#;

/// Stub downstream gateway with one route per behavior
fn stub_gateway_router() -> Router {
    Router::new()
        .route(
            "/initiate/ok",
            post(|| async {
                (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, "application/json")],
                    ACCEPTED_BODY,
                )
            }),
        )
        .route(
            "/initiate/declined",
            post(|| async { (StatusCode::PAYMENT_REQUIRED, "card declined: insufficient funds") }),
        )
        .route(
            "/initiate/error",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "gateway database offline") }),
        )
}

/// Spawn the stub gateway on an ephemeral port
async fn spawn_stub_gateway() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stub_gateway_router()).await.unwrap();
    });
    addr
}

/// Create a proxy test server pointed at the given downstream URL
fn create_proxy_server(gateway_url: String) -> TestServer {
    let config = ApiConfig {
        gateway_url,
        ..Default::default()
    };
    let state = AppState::new(&config);
    TestServer::new(create_router(state)).unwrap()
}

/// An address nothing is listening on: bind an ephemeral port, then drop
/// the listener before the test dials it.
async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

#[tokio::test]
async fn test_success_relayed_verbatim() {
    let gateway = spawn_stub_gateway().await;
    let server = create_proxy_server(format!("http://{}/initiate/ok", gateway));

    let response = server
        .post("/payments/initiate")
        .json(&json!({
            "plan": "pro_monthly",
            "amount": 2900,
            "currency": "EUR",
            "customer_email": "marta.oliveira@example.com"
        }))
        .await;

    response.assert_status_ok();
    // Byte-for-byte passthrough of the downstream body
    assert_eq!(response.text(), ACCEPTED_BODY);
}

#[tokio::test]
async fn test_downstream_4xx_wrapped_with_status_preserved() {
    let gateway = spawn_stub_gateway().await;
    let server = create_proxy_server(format!("http://{}/initiate/declined", gateway));

    let response = server
        .post("/payments/initiate")
        .json(&json!({"plan": "pro_monthly", "amount": 2900}))
        .await;

    assert_eq!(response.status_code().as_u16(), 402);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "card declined: insufficient funds");
}

#[tokio::test]
async fn test_downstream_5xx_wrapped_with_status_preserved() {
    let gateway = spawn_stub_gateway().await;
    let server = create_proxy_server(format!("http://{}/initiate/error", gateway));

    let response = server
        .post("/payments/initiate")
        .json(&json!({"plan": "starter_yearly"}))
        .await;

    assert_eq!(response.status_code().as_u16(), 500);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "gateway database offline");
}

#[tokio::test]
async fn test_connection_failure_returns_500_envelope() {
    let addr = unreachable_addr().await;
    let server = create_proxy_server(format!("http://{}/initiate", addr));

    let response = server
        .post("/payments/initiate")
        .json(&json!({"plan": "pro_monthly"}))
        .await;

    assert_eq!(response.status_code().as_u16(), 500);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().unwrap();
    assert!(
        error.starts_with("connection failure: "),
        "unexpected error message: {}",
        error
    );
}

#[tokio::test]
async fn test_payload_forwarded_byte_for_byte() {
    // Echo stub: replies with the body it received so the test can check
    // the proxy did not touch the payload on the way out.
    async fn echo(body: String) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
    }

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Router::new().route("/initiate", post(echo));
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let server = create_proxy_server(format!("http://{}/initiate", addr));

    // Keys out of alphabetical order and irregular whitespace: any
    // parse-and-reserialize step in the proxy would rewrite this.
    let payload =
        r#"{"zeta": 1,  "plan":"clinic_team", "metadata": {"ref": "dashboard","campaign": null}, "alpha": [1, 2, {"deep":  true}]}"#;

    let response = server
        .post("/payments/initiate")
        .text(payload)
        .content_type("application/json")
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), payload);
}

#[tokio::test]
async fn test_malformed_body_returns_500_envelope() {
    // The downstream is alive but must never be needed: a body that is not
    // JSON fails before any outbound call is made.
    let gateway = spawn_stub_gateway().await;
    let server = create_proxy_server(format!("http://{}/initiate/ok", gateway));

    let response = server
        .post("/payments/initiate")
        .text(r#"{"plan": "pro_monthly", "#)
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code().as_u16(), 500);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().unwrap();
    assert!(
        error.starts_with("connection failure: "),
        "unexpected error message: {}",
        error
    );
}
