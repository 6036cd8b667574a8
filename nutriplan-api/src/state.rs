//! Application state for the API server

use std::sync::Arc;

use crate::gateway::PaymentGateway;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Payment gateway client
    pub gateway: Arc<PaymentGateway>,
    /// API version
    pub version: String,
}

impl AppState {
    /// Create new app state from configuration
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            gateway: Arc::new(PaymentGateway::new(config.gateway_url.clone())),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    /// Downstream payment gateway initiation URL
    pub gateway_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            enable_cors: true,
            gateway_url: "http://localhost:8281/v1/payments/initiate".to_string(),
        }
    }
}

impl ApiConfig {
    /// Build a config from `NUTRIPLAN_*` environment variables, falling
    /// back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("NUTRIPLAN_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        let enable_cors = std::env::var("NUTRIPLAN_ENABLE_CORS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.enable_cors);

        Self {
            host: std::env::var("NUTRIPLAN_HOST").unwrap_or(defaults.host),
            port,
            enable_cors,
            gateway_url: std::env::var("NUTRIPLAN_GATEWAY_URL").unwrap_or(defaults.gateway_url),
        }
    }
}
