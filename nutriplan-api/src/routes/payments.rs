//! Payment initiation proxy
//!
//! Forwards the caller's JSON body unmodified to the configured downstream
//! gateway and relays the reply:
//!
//! - downstream 2xx: the downstream body passes through verbatim with the
//!   downstream's status code
//! - downstream non-2xx: `{ "success": false, "error": <body text> }` with
//!   the downstream status preserved
//! - transport failure (unreachable gateway, malformed request body): 500
//!   with `{ "success": false, "error": "connection failure: <cause>" }`
//!
//! No retries, no idempotency keys, no local timeout. The body is taken as
//! raw bytes so the forwarded payload is byte-for-byte what the caller
//! sent; it is parsed once only to reject non-JSON input.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::dto::PaymentErrorResponse;
use crate::state::AppState;

/// Forward a payment initiation to the downstream gateway
pub async fn initiate_payment(State(state): State<AppState>, body: Bytes) -> Response {
    if let Err(e) = serde_json::from_slice::<Value>(&body) {
        tracing::warn!("malformed payment initiation payload: {}", e);
        return connection_failure(e.to_string());
    }

    match state.gateway.forward(body.to_vec()).await {
        Ok(reply) if reply.is_success() => {
            tracing::debug!("payment initiation accepted (status {})", reply.status);
            (
                downstream_status(reply.status),
                [(header::CONTENT_TYPE, "application/json")],
                reply.body,
            )
                .into_response()
        }
        Ok(reply) => {
            tracing::warn!("payment initiation rejected downstream (status {})", reply.status);
            (
                downstream_status(reply.status),
                Json(PaymentErrorResponse::new(reply.body)),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("payment gateway unreachable: {}", e);
            connection_failure(e.to_string())
        }
    }
}

fn connection_failure(cause: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(PaymentErrorResponse::new(format!("connection failure: {}", cause))),
    )
        .into_response()
}

fn downstream_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}
