//! Main HTTP server: mounts the solve routes under the API prefix and
//! applies the cross-origin policy.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::solve_routes::{hello_handler, solve_routes, SolveState};

/// HTTP server for the solve API.
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Build the server from resolved configuration and shared solve state.
    pub fn new(config: HttpServerConfig, state: Arc<SolveState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, state: Arc<SolveState>) -> Router {
        // Permissive CORS when no origins configured (development); the
        // configured list otherwise.
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        // `nest` maps the inner "/" route onto the bare prefix only; the
        // trailing-slash form of the prefix needs its own route.
        Router::new()
            .nest("/api/alloy", solve_routes(state))
            .route("/api/alloy/", get(hello_handler))
            .layer(cors)
    }

    /// The router (for in-process testing).
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.bind_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {}: {}", self.config.bind_addr(), e),
            )
        })?;

        Logger::info(
            "HTTP_SERVER_STARTED",
            &[("addr", addr.to_string())],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await
    }
}
