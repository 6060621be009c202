//! Prediction request and response models.

use serde::Serialize;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::estimator::{EstimatorKind, ModelInfo};
use crate::features::PropertyFeatures;
use crate::investment::InvestmentParameters;
use crate::utils::number_utils::round_to;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceRange {
    pub lower: f64,
    pub upper: f64,
}

/// Point estimate with its confidence band, unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentEstimate {
    pub point_estimate: f64,
    pub confidence: ConfidenceRange,
}

impl RentEstimate {
    /// Every value rounded to display precision.
    pub fn rounded(&self) -> Self {
        Self {
            point_estimate: round_to(self.point_estimate, DISPLAY_DECIMAL_PRECISION),
            confidence: ConfidenceRange {
                lower: round_to(self.confidence.lower, DISPLAY_DECIMAL_PRECISION),
                upper: round_to(self.confidence.upper, DISPLAY_DECIMAL_PRECISION),
            },
        }
    }
}

/// Validated request values echoed back to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputFeatures {
    #[serde(flatten)]
    pub property: PropertyFeatures,
    #[serde(flatten)]
    pub investment: Option<InvestmentParameters>,
}

/// Body of a successful prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResponse {
    pub estimated_rent: f64,
    pub confidence_range: ConfidenceRange,
    pub input_features: InputFeatures,
    pub model_info: ModelInfo,
}

/// Which estimator is active, as reported by the health endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimatorStatus {
    pub model_loaded: bool,
    pub model_type: String,
    pub estimator: Option<EstimatorKind>,
    pub fallback: bool,
}
