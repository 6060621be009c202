use std::sync::Arc;

use axum::{extract::State, Json};
use rent_predictor_core::prediction::EstimatorStatus;
use serde::Serialize;

use crate::main_lib::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    #[serde(flatten)]
    estimator: EstimatorStatus,
}

/// Liveness plus the active estimation strategy.
#[utoipa::path(get, path = "/health", responses((status = 200, description = "Service health and estimator status")))]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        estimator: state.prediction_service.status(),
    })
}
