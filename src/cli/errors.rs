//! CLI-specific error types. All CLI errors are fatal to the invocation.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error("ALLOY_CLI_CONFIG_ERROR: {0}")]
    Config(#[from] ConfigError),

    #[error("ALLOY_CLI_IO_ERROR: {0}")]
    Io(#[from] std::io::Error),

    #[error("ALLOY_CLI_JSON_ERROR: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ALLOY_CLI_SERVE_ERROR: {0}")]
    Serve(String),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
