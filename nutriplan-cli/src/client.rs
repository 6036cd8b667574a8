//! API Client
//!
//! HTTP client for communicating with a running NutriPlan API server.

use nutriplan_api::HealthResponse;
use reqwest::Client;
use std::time::Duration;

use crate::error::{CliError, CliResult};

/// NutriPlan API client
pub struct ApiClient {
    /// HTTP client
    client: Client,
    /// Base URL
    base_url: String,
}

impl ApiClient {
    /// Create a new client
    pub fn new(base_url: impl Into<String>) -> CliResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CliError::connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Get health status
    pub async fn health(&self) -> CliResult<HealthResponse> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(CliError::api(
                response.status().as_u16(),
                response.text().await.unwrap_or_default(),
            ))
        }
    }
}
