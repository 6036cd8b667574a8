//! CLI command handlers

use nutriplan_api::{run_server, ApiConfig};

use crate::client::ApiClient;
use crate::error::{CliError, CliResult};
use crate::Commands;

/// Run the CLI with parsed arguments
pub async fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::Serve {
            host,
            port,
            gateway_url,
            no_cors,
        } => handle_serve(host, port, gateway_url, no_cors).await,
        Commands::Health { api_url } => handle_health(&api_url).await,
    }
}

/// Start the API server, flags overriding environment configuration
async fn handle_serve(
    host: Option<String>,
    port: Option<u16>,
    gateway_url: Option<String>,
    no_cors: bool,
) -> CliResult<()> {
    let mut config = ApiConfig::from_env();

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(gateway_url) = gateway_url {
        config.gateway_url = gateway_url;
    }
    if no_cors {
        config.enable_cors = false;
    }

    run_server(&config)
        .await
        .map_err(|e| CliError::server(e.to_string()))
}

/// Query /health on a running server and print the result
async fn handle_health(api_url: &str) -> CliResult<()> {
    let client = ApiClient::new(api_url)?;
    let health = client.health().await?;

    println!("status:  {}", health.status);
    println!("version: {}", health.version);
    println!("gateway: {}", health.gateway_url);

    Ok(())
}
