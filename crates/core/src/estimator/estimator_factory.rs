use std::sync::Arc;

use log::{info, warn};

use super::estimator_model::{EstimatorSelection, EstimatorSettings};
use super::estimator_traits::RentEstimatorTrait;
use super::heuristic_estimator::HeuristicEstimator;
use super::trained_model_estimator::TrainedModelEstimator;

pub struct EstimatorFactory;

impl EstimatorFactory {
    /// Builds the estimator that will serve every request for the life of the
    /// process.
    ///
    /// Returns `None` when a trained model was requested, could not be loaded,
    /// and heuristic fallback is disabled.
    pub fn build(settings: &EstimatorSettings) -> Option<Arc<dyn RentEstimatorTrait>> {
        let heuristic = || HeuristicEstimator::new(settings.jitter.build());
        match settings.selection {
            EstimatorSelection::Heuristic => {
                info!("Using heuristic rent estimator");
                Some(Arc::new(heuristic()))
            }
            EstimatorSelection::Trained => match TrainedModelEstimator::load(&settings.model_path) {
                Ok(estimator) => Some(Arc::new(estimator)),
                Err(e) if settings.heuristic_fallback => {
                    warn!("{}. Falling back to heuristic rent estimator", e);
                    Some(Arc::new(heuristic().into_fallback()))
                }
                Err(e) => {
                    warn!("{}. Prediction endpoint will report the model as unavailable", e);
                    None
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::{EstimatorKind, JitterSettings};
    use std::path::PathBuf;

    fn settings(selection: EstimatorSelection, fallback: bool) -> EstimatorSettings {
        EstimatorSettings {
            selection,
            model_path: PathBuf::from("/nonexistent/gradient_boosting_model.json"),
            heuristic_fallback: fallback,
            jitter: JitterSettings::default(),
        }
    }

    #[test]
    fn test_heuristic_selection() {
        let estimator = EstimatorFactory::build(&settings(EstimatorSelection::Heuristic, false))
            .expect("heuristic is always available");
        assert_eq!(estimator.kind(), EstimatorKind::Heuristic);
        assert!(!estimator.model_info().fallback);
    }

    #[test]
    fn test_missing_model_without_fallback() {
        assert!(EstimatorFactory::build(&settings(EstimatorSelection::Trained, false)).is_none());
    }

    #[test]
    fn test_missing_model_with_fallback_is_flagged() {
        let estimator = EstimatorFactory::build(&settings(EstimatorSelection::Trained, true))
            .expect("fallback estimator");
        assert_eq!(estimator.kind(), EstimatorKind::Heuristic);
        assert!(estimator.model_info().fallback);
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!(
            "trained".parse::<EstimatorSelection>().unwrap(),
            EstimatorSelection::Trained
        );
        assert_eq!(
            " Heuristic ".parse::<EstimatorSelection>().unwrap(),
            EstimatorSelection::Heuristic
        );
        assert!("random-forest".parse::<EstimatorSelection>().is_err());
    }
}
