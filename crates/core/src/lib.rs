//! Rent Predictor Core - property validation, rent estimators and response shaping.
//!
//! This crate is transport-agnostic. The HTTP server in `apps/server` wraps
//! [`prediction::PredictionService`] and maps [`errors::Error`] variants to
//! status codes.

pub mod constants;
pub mod errors;
pub mod estimator;
pub mod features;
pub mod investment;
pub mod prediction;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
