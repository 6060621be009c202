//! Adapter for an externally trained gradient-boosting regressor.
//!
//! The artifact is a JSON export of a fitted tree ensemble:
//!
//! ```json
//! {
//!   "model_type": "Gradient Boosting Regressor",
//!   "features": ["Beds", "Baths", "Footage", "Latitude", "Longitude"],
//!   "init_prediction": 3480.0,
//!   "learning_rate": 0.05,
//!   "trees": [
//!     { "nodes": [
//!       { "feature": 2, "threshold": 1050.0, "left": 1, "right": 2 },
//!       { "value": -310.0 },
//!       { "value": 420.0 }
//!     ] }
//!   ],
//!   "metadata": { "accuracy": "81.2%", "trained_on": "SF Rental Data" }
//! }
//! ```
//!
//! A sample descends to `left` when `x[feature] <= threshold`. The prediction
//! is `init_prediction + learning_rate * sum(leaf values)`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::FEATURE_DISPLAY_NAMES;
use crate::errors::EstimatorError;
use crate::estimator::estimator_model::{EstimatorKind, ModelInfo};
use crate::estimator::estimator_traits::RentEstimatorTrait;
use crate::features::PropertyFeatures;

const DEFAULT_MODEL_TYPE: &str = "Gradient Boosting Regressor";

/// Keys owned by `ModelInfo` that artifact metadata may not override.
const RESERVED_INFO_KEYS: [&str; 3] = ["type", "features", "fallback"];

fn default_model_type() -> String {
    DEFAULT_MODEL_TYPE.to_string()
}

/// A single node of a regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// Nodes of one tree; index 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

impl RegressionTree {
    fn validate(&self, tree_index: usize, feature_count: usize) -> Result<(), EstimatorError> {
        let invalid = |node: usize, reason: &str| {
            EstimatorError::ModelLoad(format!("tree {} node {}: {}", tree_index, node, reason))
        };
        if self.nodes.is_empty() {
            return Err(EstimatorError::ModelLoad(format!(
                "tree {} has no nodes",
                tree_index
            )));
        }
        for (index, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= feature_count {
                        return Err(invalid(index, "feature index out of range"));
                    }
                    if !threshold.is_finite() {
                        return Err(invalid(index, "threshold is not finite"));
                    }
                    // Children after their parent guarantee evaluation terminates.
                    for child in [left, right] {
                        if child <= index || child >= self.nodes.len() {
                            return Err(invalid(index, "child index out of order or range"));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(invalid(index, "leaf value is not finite"));
                    }
                }
            }
        }
        Ok(())
    }

    /// Leaf value reached by `x`. Only called on validated trees.
    fn predict(&self, x: &[f64]) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                TreeNode::Leaf { value } => return value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if x[feature] <= threshold { left } else { right };
                }
            }
        }
    }
}

/// Serialized gradient-boosting ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoostingArtifact {
    #[serde(default = "default_model_type")]
    pub model_type: String,
    pub features: Vec<String>,
    pub init_prediction: f64,
    pub learning_rate: f64,
    pub trees: Vec<RegressionTree>,
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
}

impl GradientBoostingArtifact {
    /// Checks that the artifact consumes the feature vector in estimator order
    /// and that every tree is well formed.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        let expected = FEATURE_DISPLAY_NAMES;
        let matches = self.features.len() == expected.len()
            && self
                .features
                .iter()
                .zip(expected)
                .all(|(actual, expected)| actual.eq_ignore_ascii_case(expected));
        if !matches {
            return Err(EstimatorError::ModelLoad(format!(
                "model features {:?} do not match expected order {:?}",
                self.features, expected
            )));
        }
        if !self.init_prediction.is_finite() || !self.learning_rate.is_finite() {
            return Err(EstimatorError::ModelLoad(
                "init_prediction and learning_rate must be finite".to_string(),
            ));
        }
        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(index, expected.len())?;
        }
        Ok(())
    }

    pub fn predict(&self, x: &[f64; 5]) -> f64 {
        let boosted: f64 = self.trees.iter().map(|tree| tree.predict(x)).sum();
        self.init_prediction + self.learning_rate * boosted
    }
}

/// Estimator backed by a trained gradient-boosting artifact.
#[derive(Debug)]
pub struct TrainedModelEstimator {
    artifact: GradientBoostingArtifact,
    info: ModelInfo,
}

impl TrainedModelEstimator {
    /// Reads and validates the artifact at `path`.
    pub fn load(path: &Path) -> Result<Self, EstimatorError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            EstimatorError::ModelLoad(format!("cannot read {}: {}", path.display(), e))
        })?;
        let artifact: GradientBoostingArtifact = serde_json::from_str(&contents)?;
        let estimator = Self::from_artifact(artifact)?;
        info!(
            "Loaded {} with {} trees from {}",
            estimator.info.model_type,
            estimator.artifact.trees.len(),
            path.display()
        );
        Ok(estimator)
    }

    pub fn from_artifact(artifact: GradientBoostingArtifact) -> Result<Self, EstimatorError> {
        artifact.validate()?;
        let metadata = artifact
            .metadata
            .iter()
            .filter(|(key, _)| !RESERVED_INFO_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let info = ModelInfo {
            model_type: artifact.model_type.clone(),
            features: artifact.features.clone(),
            fallback: false,
            metadata,
        };
        Ok(Self { artifact, info })
    }
}

impl RentEstimatorTrait for TrainedModelEstimator {
    fn estimate(&self, features: &PropertyFeatures) -> Result<f64, EstimatorError> {
        let prediction = self.artifact.predict(&features.to_vector());
        if !prediction.is_finite() {
            return Err(EstimatorError::Internal(format!(
                "model produced a non-finite prediction for {:?}",
                features
            )));
        }
        debug!("Model prediction {:.2}", prediction);
        Ok(prediction)
    }

    fn kind(&self) -> EstimatorKind {
        EstimatorKind::TrainedModel
    }

    fn model_info(&self) -> &ModelInfo {
        &self.info
    }
}
