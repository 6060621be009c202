//! Prediction module - request orchestration, confidence bands and response models.

mod confidence_band;
mod prediction_model;
mod prediction_service;
mod prediction_traits;


pub use confidence_band::ConfidenceBand;
pub use prediction_model::{
    ConfidenceRange, EstimatorStatus, InputFeatures, PredictionResponse, RentEstimate,
};
pub use prediction_service::PredictionService;
pub use prediction_traits::PredictionServiceTrait;
