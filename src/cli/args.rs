//! CLI argument definitions using clap
//!
//! Commands:
//! - alloyrun serve --config <path> [--port <port>]
//! - alloyrun interpret <dump-file> [--mode full|events|check]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// alloyrun - runs Alloy expungement models and interprets solver output
#[derive(Parser, Debug)]
#[command(name = "alloyrun")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./alloyrun.json")]
        config: PathBuf,

        /// Override the configured HTTP port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Interpret a solution dump file and print structured output
    Interpret {
        /// Path to a file holding the solver's textual output
        file: PathBuf,

        /// Which output shape to print
        #[arg(long, value_enum, default_value_t = OutputMode::Events)]
        mode: OutputMode,
    },
}

/// Output shape for offline interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Full per-state dump with aggregates
    Full,
    /// Per-event enriched listing from the last state
    Events,
    /// Minimal eligibility listing
    Check,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
