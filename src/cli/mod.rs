//! CLI module for alloyrun
//!
//! Provides the command-line interface:
//! - serve: load configuration and start the HTTP server
//! - interpret: translate a solution dump file offline

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, OutputMode};
pub use commands::{interpret, run, run_command, serve};
pub use errors::{CliError, CliResult};
