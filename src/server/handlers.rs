//! HTTP request handlers.
//!
//! Request-shape failures are rejected before the classifier is ever
//! invoked; inference failures become a 500 scoped to that one request.

use crate::dataset::{FeatureVector, FEATURE_COUNT};
use crate::server::{AppState, ErrorDetail, HealthResponse, PredictRequest, PredictResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

/// Generate a request ID for log correlation
fn request_id() -> String {
    format!("req-{:016x}", rand::random::<u64>())
}

/// Serve the static prediction form
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// Health check handler
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let health = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.uptime_secs(),
        classes: state.bundle.labels().to_vec(),
    };

    (StatusCode::OK, Json(health))
}

/// Classify one feature vector.
///
/// Malformed bodies (non-JSON, non-numeric values) surface as the
/// extractor's 4xx; a wrong element count is a 422. Both are decided
/// before the model runs.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Response {
    let req_id = request_id();

    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            log::warn!("[{req_id}] malformed request body: {rejection}");
            return (rejection.status(), Json(ErrorDetail::new(rejection.body_text())))
                .into_response();
        }
    };

    let features: FeatureVector = match request.point.as_slice().try_into() {
        Ok(features) => features,
        Err(_) => {
            log::warn!("[{req_id}] wrong feature count: {}", request.point.len());
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDetail::new(format!(
                    "expected {FEATURE_COUNT} features, got {}",
                    request.point.len()
                ))),
            )
                .into_response();
        }
    };

    match state.bundle.predict(&features) {
        Ok(prediction) => {
            log::info!("[{req_id}] predicted {}", prediction.label);
            let body = PredictResponse {
                prediction: prediction.label,
                probabilities: prediction.probabilities,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            log::error!("[{req_id}] inference failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDetail::new(e.to_string())))
                .into_response()
        }
    }
}
