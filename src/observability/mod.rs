//! # Observability
//!
//! Structured logging for the solve pipeline.

pub mod logger;

pub use logger::{Logger, Severity};
