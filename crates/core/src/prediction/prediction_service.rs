use std::sync::Arc;

use log::debug;
use serde_json::Value;

use crate::errors::{EstimatorError, Result, ValidationError};
use crate::estimator::RentEstimatorTrait;
use crate::features::validate_property_features;
use crate::investment::InvestmentParameters;

use super::confidence_band::ConfidenceBand;
use super::prediction_model::{EstimatorStatus, InputFeatures, PredictionResponse, RentEstimate};
use super::prediction_traits::PredictionServiceTrait;

const NO_MODEL_TYPE: &str = "No model loaded";

/// Validates requests, runs the active estimator and shapes the response.
///
/// Holds no mutable state; one instance serves all requests.
pub struct PredictionService {
    estimator: Option<Arc<dyn RentEstimatorTrait>>,
    band: ConfidenceBand,
}

impl PredictionService {
    pub fn new(estimator: Option<Arc<dyn RentEstimatorTrait>>, band: ConfidenceBand) -> Self {
        PredictionService { estimator, band }
    }

    /// Point estimate and band for already validated features.
    fn estimate(
        &self,
        estimator: &dyn RentEstimatorTrait,
        input: &InputFeatures,
    ) -> Result<RentEstimate> {
        let point_estimate = estimator.estimate(&input.property)?;
        if !point_estimate.is_finite() {
            return Err(EstimatorError::Internal("estimate is not finite".to_string()).into());
        }
        Ok(RentEstimate {
            point_estimate,
            confidence: self.band.band(point_estimate),
        })
    }
}

impl PredictionServiceTrait for PredictionService {
    fn predict(&self, raw: &Value) -> Result<PredictionResponse> {
        let raw = raw.as_object().ok_or(ValidationError::NotAnObject)?;
        let input = InputFeatures {
            property: validate_property_features(raw)?,
            investment: InvestmentParameters::from_request(raw)?,
        };

        let estimator = self
            .estimator
            .as_deref()
            .ok_or(EstimatorError::Unavailable)?;

        let estimate = self.estimate(estimator, &input)?.rounded();
        debug!(
            "Predicted rent {} [{}, {}] using {:?}",
            estimate.point_estimate,
            estimate.confidence.lower,
            estimate.confidence.upper,
            estimator.kind()
        );

        Ok(PredictionResponse {
            estimated_rent: estimate.point_estimate,
            confidence_range: estimate.confidence,
            input_features: input,
            model_info: estimator.model_info().clone(),
        })
    }

    fn status(&self) -> EstimatorStatus {
        match self.estimator.as_deref() {
            Some(estimator) => {
                let info = estimator.model_info();
                EstimatorStatus {
                    model_loaded: true,
                    model_type: info.model_type.clone(),
                    estimator: Some(estimator.kind()),
                    fallback: info.fallback,
                }
            }
            None => EstimatorStatus {
                model_loaded: false,
                model_type: NO_MODEL_TYPE.to_string(),
                estimator: None,
                fallback: false,
            },
        }
    }
}
