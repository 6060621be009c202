use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;

use crate::constants::FEATURE_DISPLAY_NAMES;
use crate::errors::EstimatorError;
use crate::estimator::estimator_model::{EstimatorKind, ModelInfo};
use crate::estimator::estimator_traits::RentEstimatorTrait;
use crate::estimator::jitter::{JitterSource, NoJitter};
use crate::features::PropertyFeatures;

/// Lower clamp for heuristic estimates.
pub const HEURISTIC_MIN_RENT: f64 = 1500.0;

/// Upper clamp for heuristic estimates.
pub const HEURISTIC_MAX_RENT: f64 = 15000.0;

const RENT_PER_SQUARE_FOOT: f64 = 2.8;
const RENT_PER_BEDROOM: f64 = 650.0;
const RENT_PER_BATHROOM: f64 = 350.0;

const HEURISTIC_MODEL_TYPE: &str = "Heuristic Estimator";

/// Closed-form rent estimate that needs no trained artifact.
///
/// Footage, bedrooms and bathrooms contribute linearly; the sum is scaled by
/// piecewise latitude and longitude multipliers, optionally jittered, and
/// clamped to `[HEURISTIC_MIN_RENT, HEURISTIC_MAX_RENT]`.
pub struct HeuristicEstimator {
    jitter: Arc<dyn JitterSource>,
    info: ModelInfo,
}

impl HeuristicEstimator {
    pub fn new(jitter: Arc<dyn JitterSource>) -> Self {
        Self {
            jitter,
            info: ModelInfo {
                model_type: HEURISTIC_MODEL_TYPE.to_string(),
                features: FEATURE_DISPLAY_NAMES.iter().map(|s| s.to_string()).collect(),
                fallback: false,
                metadata: BTreeMap::new(),
            },
        }
    }

    /// Heuristic without jitter; identical input yields identical output.
    pub fn deterministic() -> Self {
        Self::new(Arc::new(NoJitter))
    }

    /// Marks this estimator as standing in for an unavailable trained model.
    pub fn into_fallback(mut self) -> Self {
        self.info.fallback = true;
        self
    }

    fn latitude_adjustment(latitude: f64) -> f64 {
        if latitude > 37.79 {
            1.15
        } else if latitude > 37.77 {
            1.25
        } else if latitude < 37.75 {
            0.95
        } else {
            1.0
        }
    }

    fn longitude_adjustment(longitude: f64) -> f64 {
        if longitude > -122.40 {
            1.20
        } else if longitude > -122.43 {
            1.10
        } else {
            0.95
        }
    }
}

impl RentEstimatorTrait for HeuristicEstimator {
    fn estimate(&self, features: &PropertyFeatures) -> Result<f64, EstimatorError> {
        let base_rent = features.footage() * RENT_PER_SQUARE_FOOT;
        let bed_factor = f64::from(features.beds()) * RENT_PER_BEDROOM;
        let bath_factor = features.baths() * RENT_PER_BATHROOM;

        let lat_adj = Self::latitude_adjustment(features.latitude());
        let lng_adj = Self::longitude_adjustment(features.longitude());

        let estimate = (base_rent + bed_factor + bath_factor) * lat_adj * lng_adj;
        let estimate = estimate * self.jitter.factor();
        if !estimate.is_finite() {
            return Err(EstimatorError::Internal(format!(
                "heuristic produced a non-finite estimate for {:?}",
                features
            )));
        }

        debug!(
            "Heuristic estimate {:.2} (lat_adj={}, lng_adj={})",
            estimate, lat_adj, lng_adj
        );
        Ok(estimate.clamp(HEURISTIC_MIN_RENT, HEURISTIC_MAX_RENT))
    }

    fn kind(&self) -> EstimatorKind {
        EstimatorKind::Heuristic
    }

    fn model_info(&self) -> &ModelInfo {
        &self.info
    }
}
