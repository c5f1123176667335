//! HTTP server configuration: bind address and CORS settings.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Interface to bind (default "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on (default 8080).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; an empty list means permissive, for
    /// development against a local frontend.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Bind address in `host:port` form.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HttpServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_deserialization_fills_defaults() {
        let config: HttpServerConfig = serde_json::from_str("{\"port\": 9000}").unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
    }
}
