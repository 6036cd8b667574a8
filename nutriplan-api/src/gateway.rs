//! Payment gateway client
//!
//! Thin reqwest wrapper around the downstream payment gateway. The proxy
//! endpoint forwards initiation payloads through here unmodified and relays
//! whatever comes back; only transport failures surface as errors.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Reply from one forwarded initiation call
#[derive(Debug)]
pub struct GatewayReply {
    /// Downstream HTTP status code
    pub status: u16,
    /// Raw downstream body, captured as text
    pub body: String,
}

impl GatewayReply {
    /// Whether the downstream accepted the initiation (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Client for the downstream payment gateway
pub struct PaymentGateway {
    client: Client,
    initiate_url: String,
}

impl PaymentGateway {
    /// Create a new gateway client for the given initiation URL.
    ///
    /// No timeout is configured: the proxy has a single suspension point
    /// and waits for the downstream to answer or the transport to fail.
    pub fn new(initiate_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            initiate_url: initiate_url.into(),
        }
    }

    /// Forward a payment-initiation payload to the downstream gateway.
    ///
    /// The payload is the caller's raw body bytes, relayed without
    /// re-serialization so key order and whitespace survive; no schema
    /// validation, retries, or idempotency keys. Any HTTP reply, success or
    /// not, is returned as a `GatewayReply`; `Err` means the call never
    /// completed (connection refused, DNS failure, broken transfer).
    pub async fn forward(&self, payload: Vec<u8>) -> Result<GatewayReply, reqwest::Error> {
        let response = self
            .client
            .post(&self.initiate_url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(GatewayReply { status, body })
    }

    /// The configured downstream initiation URL
    pub fn initiate_url(&self) -> &str {
        &self.initiate_url
    }
}
