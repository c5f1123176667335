//! External-process solver backend.
//!
//! Interface contract with the wrapped solver command:
//!
//! - the composed model text is piped to the command's stdin
//! - a satisfiable run prints the solution dump on stdout
//! - an unsatisfiable run prints a first line `UNSAT` (or nothing)
//! - a non-zero exit status is a backend failure; stderr carries the detail
//!
//! The solve is synchronous and uninterruptible: callers that must not
//! block dispatch it on a blocking worker.

use std::io::Write;
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};

use super::{SolveOutcome, Solver, SolverError};

/// Sentinel first line signalling an unsatisfiable run.
const UNSAT_SENTINEL: &str = "UNSAT";

/// Configuration for the external solver command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Executable to run.
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments passed before the model is piped in.
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_command() -> String {
    "alloy-solve".to_string()
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: Vec::new(),
        }
    }
}

/// Solver backend that shells out to a configured external command.
pub struct ProcessSolver {
    config: SolverConfig,
}

impl ProcessSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl Solver for ProcessSolver {
    fn solve(&self, model: &str) -> Result<SolveOutcome, SolverError> {
        let spawn_err = |source| SolverError::Spawn {
            command: self.config.command.clone(),
            source,
        };

        let mut child = Command::new(&self.config.command)
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;

        // Feed stdin from its own thread while stdout is drained below.
        // Writing inline would deadlock once both pipe buffers fill: the
        // child blocked writing its dump, this thread blocked writing the
        // model. A write failure here means the child stopped reading; its
        // exit status carries the real story.
        let writer = child.stdin.take().map(|mut stdin| {
            let model = model.to_string();
            std::thread::spawn(move || {
                let _ = stdin.write_all(model.as_bytes());
            })
        });

        let output = child.wait_with_output().map_err(spawn_err)?;

        if let Some(handle) = writer {
            let _ = handle.join();
        }

        if !output.status.success() {
            return Err(SolverError::Backend {
                detail: format!(
                    "solver exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let dump = String::from_utf8_lossy(&output.stdout).into_owned();
        let first_line = dump.lines().next().unwrap_or("").trim();
        if dump.trim().is_empty() || first_line == UNSAT_SENTINEL {
            return Ok(SolveOutcome::NoSolution);
        }

        Ok(SolveOutcome::Solved(dump))
    }
}
