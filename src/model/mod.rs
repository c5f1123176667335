//! # Model Loading and Predicate Templating
//!
//! Reads the configured base model text and appends the user predicate
//! before handing the composed model to the solver.

pub mod loader;
pub mod template;

pub use loader::{load_model, ModelError, ModelPaths, ModelVariant};
pub use template::{compose, wrap_predicate};
