//! # HTTP Server
//!
//! Axum transport layer for the solve pipeline: route registration,
//! request/response marshaling, and cross-origin policy. All domain logic
//! lives in the interpreter; handlers here are thin glue.

pub mod config;
pub mod errors;
pub mod server;
pub mod solve_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use solve_routes::{solve_routes, SolveRequest, SolveState};
