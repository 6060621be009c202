use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rent_predictor_core::errors::{Error as CoreError, EstimatorError};
use serde::Serialize;
use thiserror::Error;

/// Message returned for failures whose details stay in the server log.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "Prediction error: an unexpected error occurred while estimating rent";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                CoreError::Estimator(EstimatorError::Unavailable) => {
                    (StatusCode::SERVICE_UNAVAILABLE, e.to_string())
                }
                _ => {
                    tracing::error!("Prediction failed: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        INTERNAL_ERROR_MESSAGE.to_string(),
                    )
                }
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Internal(reason) => {
                tracing::error!("Internal error: {}", reason);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };
        (status, Json(ErrorBody { error: msg })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
