//! Estimator module - rent estimation strategies and their selection.

mod estimator_factory;
mod estimator_model;
mod estimator_traits;
mod heuristic_estimator;
mod jitter;
mod trained_model_estimator;

#[cfg(test)]
mod heuristic_estimator_tests;

pub use estimator_factory::EstimatorFactory;
pub use estimator_model::{EstimatorKind, EstimatorSelection, EstimatorSettings, ModelInfo};
pub use estimator_traits::RentEstimatorTrait;
pub use heuristic_estimator::{HeuristicEstimator, HEURISTIC_MAX_RENT, HEURISTIC_MIN_RENT};
pub use jitter::{JitterSettings, JitterSource, NoJitter, UniformJitter, DEFAULT_JITTER_SPREAD};
pub use trained_model_estimator::{
    GradientBoostingArtifact, RegressionTree, TrainedModelEstimator, TreeNode,
};
