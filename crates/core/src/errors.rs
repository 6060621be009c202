//! Core error types for the rent predictor.
//!
//! This module defines transport-agnostic error types. The HTTP layer maps
//! each variant to a status code and an error payload.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the rent predictor.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Estimator(#[from] EstimatorError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Validation errors for request input.
///
/// Messages are surfaced verbatim to API clients.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },

    #[error("{field} must be a whole number")]
    NotAnInteger { field: &'static str },
}

impl ValidationError {
    /// Name of the request field that failed validation, if any.
    pub fn field(&self) -> Option<&'static str> {
        match *self {
            ValidationError::NotAnObject => None,
            ValidationError::MissingField(field) => Some(field),
            ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidNumber { field }
            | ValidationError::NotAnInteger { field } => Some(field),
        }
    }
}

/// Errors raised by rent estimators.
#[derive(Error, Debug)]
pub enum EstimatorError {
    /// No estimation strategy is ready to serve predictions.
    #[error("Model not loaded. Please ensure the model file exists.")]
    Unavailable,

    /// The trained model artifact could not be read or is malformed.
    #[error("Failed to load model artifact: {0}")]
    ModelLoad(String),

    /// Unexpected failure while computing an estimate.
    #[error("Estimation failed: {0}")]
    Internal(String),
}

impl From<std::io::Error> for EstimatorError {
    fn from(err: std::io::Error) -> Self {
        EstimatorError::ModelLoad(err.to_string())
    }
}

impl From<serde_json::Error> for EstimatorError {
    fn from(err: serde_json::Error) -> Self {
        EstimatorError::ModelLoad(err.to_string())
    }
}
