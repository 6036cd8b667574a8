//! Data Transfer Objects for API responses

use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Downstream payment gateway this instance forwards to
    pub gateway_url: String,
}

/// Error envelope returned by the payment proxy when the downstream
/// gateway rejects an initiation or cannot be reached
#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentErrorResponse {
    pub success: bool,
    pub error: String,
}

impl PaymentErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
