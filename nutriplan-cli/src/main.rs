//! NutriPlan Command Line Interface
//!
//! Configuration is loaded from environment variables (via .env file).
//! Command-line arguments override environment variables.
//!
//! Usage:
//!   nutriplan serve     - Start the NutriPlan API server
//!   nutriplan health    - Check health of a running server

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod client;
mod commands;
mod error;

#[derive(Parser)]
#[command(name = "nutriplan")]
#[command(about = "NutriPlan backend CLI")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Downstream payment gateway initiation URL
        #[arg(short, long)]
        gateway_url: Option<String>,
        /// Disable the permissive CORS layer
        #[arg(long)]
        no_cors: bool,
    },

    /// Check health of a running server
    Health {
        /// API server URL
        #[arg(short, long, default_value = "http://localhost:4000")]
        api_url: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.verbose {
        init_logging();
    }

    if let Err(e) = commands::run(cli.command).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Initialize logging with tracing
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nutriplan_cli=debug,nutriplan_api=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
