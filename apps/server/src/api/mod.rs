use std::{any::Any, sync::Arc};

use axum::{
    http::HeaderValue,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{config::Config, error::ApiError, main_lib::AppState};

pub mod health;
pub mod predict;

#[derive(OpenApi)]
#[openapi(
    info(title = "SF Rent Prediction API", version = "1.0.0"),
    paths(root, health::health, predict::predict)
)]
struct ApiDoc;

#[utoipa::path(get, path = "/", responses((status = 200, description = "API directory")))]
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to SF Rent Prediction API",
        "endpoints": {
            "/predict": "POST - Predict rent for a property",
            "/health": "GET - Health check",
            "/openapi.json": "GET - API documentation"
        }
    }))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(cors::Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };
    layer.allow_methods(cors::Any).allow_headers(cors::Any)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    Router::new()
        .route("/", get(root))
        .route("/health", get(health::health))
        .route("/predict", post(predict::predict))
        .route("/openapi.json", get(move || async move { Json(openapi) }))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer(config))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
