//! Base model selection and loading.
//!
//! Two base model files are configured at startup; the request's `type`
//! field selects between them. The paths travel inside the configuration
//! value handed to each call, never as process-wide state.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Which base model a request targets.
///
/// Mirrors the boundary contract: the literal `"forward"` selects the
/// forward model, anything else the backward one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelVariant {
    Forward,
    Backward,
}

impl<'de> Deserialize<'de> for ModelVariant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw == "forward" {
            ModelVariant::Forward
        } else {
            ModelVariant::Backward
        })
    }
}

/// Filesystem paths to the two base model definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPaths {
    pub forward: PathBuf,
    pub backward: PathBuf,
}

impl ModelPaths {
    /// Path for the given variant.
    pub fn path_for(&self, variant: ModelVariant) -> &PathBuf {
        match variant {
            ModelVariant::Forward => &self.forward,
            ModelVariant::Backward => &self.backward,
        }
    }
}

/// Model loading failures. Fatal to the request that triggered them.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Error reading the Alloy model file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read the base model text for the selected variant.
pub fn load_model(paths: &ModelPaths, variant: ModelVariant) -> Result<String, ModelError> {
    let path = paths.path_for(variant);
    fs::read_to_string(path).map_err(|source| ModelError::Read {
        path: path.clone(),
        source,
    })
}
