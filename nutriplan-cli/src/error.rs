//! CLI Error Types

use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// API connection error
    #[error("API connection error: {message}")]
    ConnectionError { message: String },

    /// API request failed
    #[error("API request failed: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server error
    #[error("Server error: {message}")]
    ServerError { message: String },
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        CliError::ConfigError {
            message: message.into(),
        }
    }

    /// Create a connection error
    pub fn connection(message: impl Into<String>) -> Self {
        CliError::ConnectionError {
            message: message.into(),
        }
    }

    /// Create an API error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        CliError::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        CliError::ServerError {
            message: message.into(),
        }
    }

    /// Get exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ConfigError { .. } => 1,
            CliError::ConnectionError { .. } => 3,
            CliError::ApiError { .. } => 4,
            CliError::JsonError(_) => 6,
            CliError::HttpError(_) => 7,
            CliError::ServerError { .. } => 30,
        }
    }
}
