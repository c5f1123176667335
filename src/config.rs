//! # Process Configuration
//!
//! One JSON file resolved once at startup, then passed by value into the
//! subsystems that need it. Nothing here is ambient: the model loader and
//! solver receive their slices of the configuration at call time.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::HttpServerConfig;
use crate::model::ModelPaths;
use crate::solver::SolverConfig;

/// Configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Paths to the two base model definitions (required).
    pub models: ModelPaths,

    /// External solver command (optional, defaults apply).
    #[serde(default)]
    pub solver: SolverConfig,

    /// HTTP bind and CORS settings (optional, defaults apply).
    #[serde(default)]
    pub http: HttpServerConfig,
}

/// Configuration load failures. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl AppConfig {
    /// Load and validate configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot serve any request.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.models.forward.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "models.forward must not be empty".to_string(),
            ));
        }
        if self.models.backward.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "models.backward must not be empty".to_string(),
            ));
        }
        if self.solver.command.is_empty() {
            return Err(ConfigError::Invalid(
                "solver.command must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
