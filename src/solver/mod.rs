//! # Constraint Solver Boundary
//!
//! The solver is a black box: given a composed model text it either reports
//! the model unsatisfiable or yields the textual solution dump that feeds
//! the interpreter. Which SAT backend runs behind the boundary is out of
//! scope; everything in this crate talks to the [`Solver`] trait.
//!
//! "No solution" is an ordinary outcome, not an error. Only infrastructure
//! failures (the backend cannot be launched, crashes, or reports a
//! structural model error) travel the error path.

pub mod process;

use thiserror::Error;

pub use process::{ProcessSolver, SolverConfig};

/// Outcome of a completed solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The model is unsatisfiable under the user predicate.
    NoSolution,
    /// The solver found a model; the payload is its textual state dump.
    Solved(String),
}

/// Solver infrastructure failures.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Error during Alloy model execution: failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error during Alloy model execution: {detail}")]
    Backend { detail: String },
}

/// A solver backend. A started solve always runs to completion; there is no
/// cancellation and no internal timeout.
pub trait Solver: Send + Sync {
    fn solve(&self, model: &str) -> Result<SolveOutcome, SolverError>;
}
