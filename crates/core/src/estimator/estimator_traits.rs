use crate::errors::EstimatorError;
use crate::estimator::estimator_model::{EstimatorKind, ModelInfo};
use crate::features::PropertyFeatures;

/// A strategy that turns validated property features into a monthly rent.
///
/// Implementations are immutable after construction and shared across
/// concurrently handled requests.
pub trait RentEstimatorTrait: Send + Sync {
    /// Monthly rent estimate in currency units.
    fn estimate(&self, features: &PropertyFeatures) -> Result<f64, EstimatorError>;

    fn kind(&self) -> EstimatorKind;

    /// Descriptive information reported alongside each prediction.
    fn model_info(&self) -> &ModelInfo;
}
