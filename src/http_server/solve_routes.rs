//! Solve HTTP Routes
//!
//! The three endpoints of the original service, one per output mode:
//!
//! - `POST /run` — full per-state dump with aggregates
//! - `POST /evaluate` — per-event enriched listing
//! - `POST /check` — minimal eligibility listing
//!
//! plus a root greeting used as a liveness probe. Every handler runs the
//! same pipeline (load model → append predicate → solve → interpret) and
//! differs only in the formatter applied to the outcome.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::interpreter::output::{self, EligibilityReport, EventReport, FullReport};
use crate::model::{self, ModelVariant};
use crate::observability::Logger;
use crate::solver::{SolveOutcome, Solver};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// State shared across solve handlers: resolved configuration plus the
/// solver backend behind its trait seam.
pub struct SolveState {
    pub config: AppConfig,
    pub solver: Arc<dyn Solver>,
}

impl SolveState {
    pub fn new(config: AppConfig, solver: Arc<dyn Solver>) -> Self {
        Self { config, solver }
    }
}

// ==================
// Request Types
// ==================

/// Solve request body.
#[derive(Debug, Clone, Deserialize)]
pub struct SolveRequest {
    /// Free-form constraint body appended as the user predicate.
    pub predicate: String,
    /// Solver command directive (`run ...` line).
    pub run: String,
    /// Which base model to load.
    #[serde(rename = "type")]
    pub variant: ModelVariant,
}

/// Build the solve router.
pub fn solve_routes(state: Arc<SolveState>) -> Router {
    Router::new()
        .route("/", get(hello_handler))
        .route("/run", post(run_handler))
        .route("/evaluate", post(evaluate_handler))
        .route("/check", post(check_handler))
        .with_state(state)
}

// ==================
// Pipeline
// ==================

/// Run the solve pipeline and return the solution dump, or an empty dump
/// for unsatisfiable runs.
///
/// The solver call is dispatched on the blocking worker pool so request
/// handling threads are never tied up by a long solve. A started solve
/// always runs to completion; there is no cancellation or timeout.
async fn solve_to_dump(state: &SolveState, request: SolveRequest) -> ApiResult<String> {
    let base = model::load_model(&state.config.models, request.variant)?;
    let composed = model::compose(&base, &request.predicate, &request.run);

    let solver = Arc::clone(&state.solver);
    let outcome = tokio::task::spawn_blocking(move || solver.solve(&composed))
        .await
        .map_err(|join| ApiError::Internal(format!("solver task failed: {}", join)))??;

    match outcome {
        SolveOutcome::Solved(dump) => {
            Logger::info(
                "SOLVE_COMPLETED",
                &[
                    ("satisfiable", "true".to_string()),
                    ("dump_bytes", dump.len().to_string()),
                ],
            );
            Ok(dump)
        }
        SolveOutcome::NoSolution => {
            // Unsatisfiable is a normal outcome; an empty dump makes every
            // formatter produce its empty-success shape.
            Logger::info(
                "SOLVE_COMPLETED",
                &[("satisfiable", "false".to_string())],
            );
            Ok(String::new())
        }
    }
}

// ==================
// Handlers
// ==================

/// Liveness greeting. Registered both at the nest root and, by the server,
/// at the trailing-slash form of the prefix, which `nest` alone does not
/// match.
pub(super) async fn hello_handler() -> &'static str {
    "alloyrun"
}

async fn run_handler(
    State(state): State<Arc<SolveState>>,
    Json(request): Json<SolveRequest>,
) -> ApiResult<Json<FullReport>> {
    let dump = solve_to_dump(&state, request).await?;
    Ok(Json(output::full_report(&dump)))
}

async fn evaluate_handler(
    State(state): State<Arc<SolveState>>,
    Json(request): Json<SolveRequest>,
) -> ApiResult<Json<EventReport>> {
    let dump = solve_to_dump(&state, request).await?;
    Ok(Json(output::event_report(&dump)))
}

async fn check_handler(
    State(state): State<Arc<SolveState>>,
    Json(request): Json<SolveRequest>,
) -> ApiResult<Json<EligibilityReport>> {
    let dump = solve_to_dump(&state, request).await?;
    Ok(Json(output::eligibility_report(&dump)))
}
