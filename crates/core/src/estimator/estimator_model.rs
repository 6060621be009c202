//! Estimator configuration and reporting models.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::errors::Error;
use crate::estimator::jitter::JitterSettings;

/// Which estimation strategy is serving predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorKind {
    TrainedModel,
    Heuristic,
}

/// Strategy requested by the deployer at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EstimatorSelection {
    /// Load the trained model artifact.
    #[default]
    Trained,
    /// Always use the closed-form heuristic.
    Heuristic,
}

impl FromStr for EstimatorSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trained" | "trained_model" | "model" => Ok(EstimatorSelection::Trained),
            "heuristic" => Ok(EstimatorSelection::Heuristic),
            other => Err(Error::InvalidConfigValue(format!(
                "unknown estimator '{}', expected 'trained' or 'heuristic'",
                other
            ))),
        }
    }
}

/// Startup settings for building the active estimator.
#[derive(Debug, Clone)]
pub struct EstimatorSettings {
    pub selection: EstimatorSelection,
    pub model_path: PathBuf,
    /// Serve heuristic estimates when the trained artifact cannot be loaded.
    pub heuristic_fallback: bool,
    pub jitter: JitterSettings,
}

/// Information about the active estimator, reported as `model_info`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    #[serde(rename = "type")]
    pub model_type: String,
    pub features: Vec<String>,
    /// True when the heuristic stands in for an unavailable trained model.
    pub fallback: bool,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, Value>,
}
