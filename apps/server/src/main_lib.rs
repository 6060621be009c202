use std::sync::Arc;

use crate::config::{Config, LogFormat};
use rent_predictor_core::{
    estimator::EstimatorFactory,
    prediction::{ConfidenceBand, PredictionService, PredictionServiceTrait},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub prediction_service: Arc<dyn PredictionServiceTrait + Send + Sync>,
}

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format == LogFormat::Json {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Builds the estimator once and wires it into the shared state.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let band = ConfidenceBand::new(config.confidence_spread)?;
    let estimator = EstimatorFactory::build(&config.estimator);
    let prediction_service = Arc::new(PredictionService::new(estimator, band));

    let status = prediction_service.status();
    if status.model_loaded {
        tracing::info!(
            estimator = ?status.estimator,
            fallback = status.fallback,
            confidence_spread = band.spread(),
            "Rent estimator ready: {}",
            status.model_type
        );
    } else {
        tracing::warn!("No rent estimator available; /predict will answer 503");
    }

    Ok(Arc::new(AppState { prediction_service }))
}
