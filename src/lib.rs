//! alloyrun - runs Alloy expungement models and interprets solver output
//!
//! Pipeline: load the selected base model, append the user predicate, hand
//! the composed model to the solver backend, then interpret the solver's
//! textual state dump into one of three structured output shapes.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod interpreter;
pub mod model;
pub mod observability;
pub mod solver;
