//! CLI command implementations
//!
//! `serve` resolves configuration once, wires the solver backend behind its
//! trait seam, and hands everything to the HTTP server. `interpret` runs
//! the interpreter over an existing dump file with no solver involved.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::http_server::{HttpServer, SolveState};
use crate::interpreter::output;
use crate::observability::Logger;
use crate::solver::ProcessSolver;

use super::args::{Cli, Command, OutputMode};
use super::errors::CliResult;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Interpret { file, mode } => interpret(&file, mode),
    }
}

/// Load configuration and serve the HTTP API until the process exits.
pub fn serve(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    let mut config = AppConfig::load(config_path)?;
    if let Some(port) = port_override {
        config.http.port = port;
    }

    Logger::info(
        "CONFIG_LOADED",
        &[
            ("forward_model", config.models.forward.display().to_string()),
            ("backward_model", config.models.backward.display().to_string()),
            ("solver_command", config.solver.command.clone()),
        ],
    );

    let solver = Arc::new(ProcessSolver::new(config.solver.clone()));
    let http_config = config.http.clone();
    let state = Arc::new(SolveState::new(config, solver));
    let server = HttpServer::new(http_config, state);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| super::CliError::Serve(format!("failed to create tokio runtime: {}", e)))?;

    runtime.block_on(async {
        server
            .start()
            .await
            .map_err(|e| super::CliError::Serve(format!("HTTP server failed: {}", e)))
    })
}

/// Interpret a solution dump file and print the selected output shape.
pub fn interpret(file: &Path, mode: OutputMode) -> CliResult<()> {
    let dump = fs::read_to_string(file)?;

    let rendered = match mode {
        OutputMode::Full => serde_json::to_string_pretty(&output::full_report(&dump))?,
        OutputMode::Events => serde_json::to_string_pretty(&output::event_report(&dump))?,
        OutputMode::Check => serde_json::to_string_pretty(&output::eligibility_report(&dump))?,
    };

    println!("{}", rendered);
    Ok(())
}
