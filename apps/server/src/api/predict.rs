use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use rent_predictor_core::prediction::PredictionResponse;
use serde_json::Value;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// Predict monthly rent for a property.
#[utoipa::path(
    post,
    path = "/predict",
    responses(
        (status = 200, description = "Rent estimate with confidence range"),
        (status = 400, description = "Missing, malformed or out-of-range field"),
        (status = 503, description = "No estimator loaded"),
        (status = 500, description = "Unexpected estimation failure")
    )
)]
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<PredictionResponse>> {
    let Json(raw) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let response = state.prediction_service.predict(&raw)?;
    tracing::debug!(estimated_rent = response.estimated_rent, "Prediction served");
    Ok(Json(response))
}
