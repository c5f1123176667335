//! Output Mode Tests
//!
//! Drives the HTTP pipeline end-to-end with a fake solver backend and
//! checks the JSON shape of each of the three output modes, plus the
//! in-band failure contract.

use std::fs;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use alloyrun::config::AppConfig;
use alloyrun::http_server::{HttpServer, HttpServerConfig, SolveState};
use alloyrun::model::ModelPaths;
use alloyrun::solver::{SolveOutcome, Solver, SolverError};

// =============================================================================
// Helpers
// =============================================================================

/// Fake solver: hands back a canned outcome, or a backend failure.
struct FakeSolver {
    response: Result<SolveOutcome, String>,
}

impl Solver for FakeSolver {
    fn solve(&self, _model: &str) -> Result<SolveOutcome, SolverError> {
        match &self.response {
            Ok(outcome) => Ok(outcome.clone()),
            Err(detail) => Err(SolverError::Backend {
                detail: detail.clone(),
            }),
        }
    }
}

const DUMP: &str = "skolem $userDefinedPredicate_caseA={E1}\n\
    ------State 0-------\n\
    this/now={2020-01-01}\n\
    this/Event={E1, E2}\n\
    this/Event<:date={E1->2020-01-01, E2->2021-06-15}\n\
    this/pastExpunged={}\n\
    ------State 1 (loop)-------\n\
    this/now={2021-06-15}\n\
    this/Event={E1, E2}\n\
    this/Event<:date={E1->2020-01-01, E2->2021-06-15}\n\
    this/OWI={E2}\n\
    this/pastExpunged={E1}\n\
    this/backwardWaitingViolations={E2}\n";

fn router_with(tmp: &TempDir, response: Result<SolveOutcome, String>) -> axum::Router {
    let forward = tmp.path().join("forward.als");
    let backward = tmp.path().join("backward.als");
    fs::write(&forward, "sig Event {}").unwrap();
    fs::write(&backward, "sig Event {}").unwrap();

    let config = AppConfig {
        models: ModelPaths { forward, backward },
        solver: Default::default(),
        http: Default::default(),
    };
    let state = Arc::new(SolveState::new(config, Arc::new(FakeSolver { response })));
    HttpServer::new(HttpServerConfig::default(), state).router()
}

async fn post_json(router: axum::Router, path: &str) -> (StatusCode, Value) {
    let body = json!({
        "predicate": "some E: Event | expunged[E]",
        "run": "run userDefinedPredicate",
        "type": "forward"
    });
    let request = Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Mode Shapes
// =============================================================================

#[tokio::test]
async fn test_run_mode_full_dump_shape() {
    let tmp = TempDir::new().unwrap();
    let router = router_with(&tmp, Ok(SolveOutcome::Solved(DUMP.to_string())));

    let (status, body) = post_json(router, "/api/alloy/run").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][1]["state"], 1);
    assert_eq!(body["data"][1]["event_date"]["E1"], "2020-01-01");
    assert_eq!(body["expungements"]["E1"], "2020-01-01");
    assert_eq!(body["violations"]["backwardWaitingViolations"][0]["event"], "E2");
    // Reserved date buckets are present but always empty.
    assert_eq!(body["data"][0]["date_attributes"]["withinFive"], json!([]));
}

#[tokio::test]
async fn test_evaluate_mode_event_listing() {
    let tmp = TempDir::new().unwrap();
    let router = router_with(&tmp, Ok(SolveOutcome::Solved(DUMP.to_string())));

    let (status, body) = post_json(router, "/api/alloy/evaluate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let events = body["data"].as_array().unwrap();
    assert_eq!(events.len(), 2);

    let e1 = events.iter().find(|e| e["event"] == "E1").unwrap();
    assert_eq!(e1["id"], "caseA");
    assert_eq!(e1["date"], "2020-01-01");
    assert_eq!(e1["owi"], false);
    assert_eq!(e1["expunged"], true);
    assert_eq!(e1["violations"], json!([]));

    let e2 = events.iter().find(|e| e["event"] == "E2").unwrap();
    assert_eq!(e2["owi"], true);
    assert_eq!(e2["violations"], json!(["backwardWaitingViolations"]));
}

#[tokio::test]
async fn test_check_mode_minimal_listing() {
    let tmp = TempDir::new().unwrap();
    let router = router_with(&tmp, Ok(SolveOutcome::Solved(DUMP.to_string())));

    let (status, body) = post_json(router, "/api/alloy/check").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "expungements": ["E1"]}));
}

// =============================================================================
// No-Solution and Failure Contracts
// =============================================================================

#[tokio::test]
async fn test_unsat_is_empty_success_in_every_mode() {
    for path in ["/api/alloy/run", "/api/alloy/evaluate", "/api/alloy/check"] {
        let tmp = TempDir::new().unwrap();
        let router = router_with(&tmp, Ok(SolveOutcome::NoSolution));

        let (status, body) = post_json(router, path).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body.get("error").is_none());
    }
}

#[tokio::test]
async fn test_solver_failure_is_in_band_error() {
    let tmp = TempDir::new().unwrap();
    let router = router_with(&tmp, Err("unexpected token in predicate".to_string()));

    let (status, body) = post_json(router, "/api/alloy/run").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("model execution"));
    assert!(message.contains("unexpected token"));
}

#[tokio::test]
async fn test_model_read_failure_names_the_read() {
    let tmp = TempDir::new().unwrap();
    let router = router_with(&tmp, Ok(SolveOutcome::NoSolution));
    fs::remove_file(tmp.path().join("forward.als")).unwrap();

    let (status, body) = post_json(router, "/api/alloy/evaluate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("reading the Alloy model file"));
}

#[tokio::test]
async fn test_type_field_selects_backward_for_unknown_values() {
    let tmp = TempDir::new().unwrap();
    let router = router_with(&tmp, Ok(SolveOutcome::NoSolution));
    // Remove only the forward model: an unknown `type` must route to the
    // backward model and still succeed.
    fs::remove_file(tmp.path().join("forward.als")).unwrap();

    let body = json!({"predicate": "", "run": "run {}", "type": "reverse"});
    let request = Request::post("/api/alloy/check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["success"], true);
}

#[tokio::test]
async fn test_health_probe_answers_with_and_without_trailing_slash() {
    let tmp = TempDir::new().unwrap();
    let router = router_with(&tmp, Ok(SolveOutcome::NoSolution));

    for path in ["/api/alloy", "/api/alloy/"] {
        let request = Request::get(path).body(Body::empty()).unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {}", path);
    }
}
