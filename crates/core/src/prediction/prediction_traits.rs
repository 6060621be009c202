use serde_json::Value;

use crate::errors::Result;
use crate::prediction::prediction_model::{EstimatorStatus, PredictionResponse};

/// Trait for prediction service operations
pub trait PredictionServiceTrait: Send + Sync {
    /// Validates a raw request body and produces a rent prediction.
    fn predict(&self, raw: &Value) -> Result<PredictionResponse>;

    fn status(&self) -> EstimatorStatus;
}
