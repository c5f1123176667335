//! # API Errors
//!
//! Request failures reported in-band: every failure body is
//! `{"success": false, "error": "..."}`, with the message distinguishing a
//! model-read failure from a solve failure. "No solution" never reaches
//! this type; the interpreter resolves it to an empty success response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::model::ModelError;
use crate::solver::SolverError;

/// Result type for solve endpoints.
pub type ApiResult<T> = Result<T, ApiError>;

/// Per-request failures. Each request is independent; a failure never
/// corrupts state for subsequent requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Selected base model file could not be read.
    #[error("{0}")]
    ModelRead(#[from] ModelError),

    /// The solver backend failed structurally.
    #[error("{0}")]
    Solver(#[from] SolverError),

    /// The blocking solve task could not be joined.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this failure.
    ///
    /// Model and solver failures stay 200: the success flag in the body is
    /// the failure channel consumers key on.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ModelRead(_) => StatusCode::OK,
            ApiError::Solver(_) => StatusCode::OK,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
