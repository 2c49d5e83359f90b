//! HTTP serving layer.
//!
//! One axum router over a shared, immutable [`ModelBundle`]: the static
//! form at `/`, a liveness report at `/health`, and the prediction
//! endpoint at `/predict`. The bundle sits behind an `Arc` and is never
//! mutated, so handlers need no locking.

mod handlers;

pub use handlers::{health_check, index, predict};

use crate::model::ModelBundle;
use crate::{Error, Result};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    pub address: SocketAddr,
    /// Allow cross-origin requests (the demo form may be opened from a
    /// file:// page rather than through `GET /`)
    pub cors_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:8000".parse().expect("static address parses"),
            cors_enabled: true,
        }
    }
}

impl ServerConfig {
    /// Create config with custom address
    pub fn with_address(mut self, addr: SocketAddr) -> Self {
        self.address = addr;
        self
    }

    /// Disable CORS
    pub fn without_cors(mut self) -> Self {
        self.cors_enabled = false;
        self
    }
}

/// Shared handler state: the resolved bundle plus process start time.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide model, resolved once before serving
    pub bundle: Arc<ModelBundle>,
    started: Instant,
}

impl AppState {
    /// Wrap a resolved bundle for sharing across handlers
    pub fn new(bundle: ModelBundle) -> Self {
        Self { bundle: Arc::new(bundle), started: Instant::now() }
    }

    /// Seconds since the state was created
    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}

/// Prediction request body: one feature vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Ordered feature values; must hold exactly four numbers
    pub point: Vec<f32>,
}

/// Successful prediction response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    /// The winning class label
    pub prediction: String,
    /// Per-label probability, null when the model cannot estimate it
    pub probabilities: Option<BTreeMap<String, f32>>,
}

/// Error body for 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable failure description
    pub detail: String,
}

impl ErrorDetail {
    /// Build an error body from any displayable failure
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status
    pub status: String,
    /// Server version
    pub version: String,
    /// Uptime in seconds
    pub uptime_secs: u64,
    /// Class labels the model can predict
    pub classes: Vec<String>,
}

/// Build the application router over shared state.
pub fn router(config: &ServerConfig, state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/predict", post(handlers::predict))
        .with_state(state);

    if config.cors_enabled {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

/// The prediction server: config plus the resolved model.
pub struct PredictServer {
    config: ServerConfig,
    bundle: ModelBundle,
}

impl PredictServer {
    /// Create a server from a config and an already-resolved bundle
    pub fn new(config: ServerConfig, bundle: ModelBundle) -> Self {
        Self { config, bundle }
    }

    /// Bind the configured address and serve until the process exits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bind`] when the address cannot be bound, or an
    /// IO error if the listener fails while serving.
    pub async fn run(self) -> Result<()> {
        let state = AppState::new(self.bundle);
        let app = router(&self.config, state);

        let listener = tokio::net::TcpListener::bind(self.config.address)
            .await
            .map_err(|e| Error::Bind(format!("{}: {e}", self.config.address)))?;
        log::info!("serving predictions on http://{}", self.config.address);

        axum::serve(listener, app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.address.port(), 8000);
        assert!(config.cors_enabled);
    }

    #[test]
    fn test_server_config_with_address() {
        let addr: SocketAddr = "0.0.0.0:9000".parse().unwrap();
        let config = ServerConfig::default().with_address(addr);
        assert_eq!(config.address.port(), 9000);
    }

    #[test]
    fn test_server_config_without_cors() {
        let config = ServerConfig::default().without_cors();
        assert!(!config.cors_enabled);
    }

    #[test]
    fn test_predict_request_parses_array_form() {
        let json = r#"{"point": [5.1, 3.5, 1.4, 0.2]}"#;
        let req: PredictRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.point.len(), 4);
    }

    #[test]
    fn test_predict_request_rejects_non_numeric() {
        let json = r#"{"point": ["a", "b", "c", "d"]}"#;
        assert!(serde_json::from_str::<PredictRequest>(json).is_err());
    }

    #[test]
    fn test_predict_response_null_probabilities_serialize() {
        let resp = PredictResponse { prediction: "setosa".to_string(), probabilities: None };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"probabilities\":null"));
    }

    #[test]
    fn test_error_detail_serializes_like_the_client_expects() {
        let body = ErrorDetail::new("expected 4 features, got 3");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"detail":"expected 4 features, got 3"}"#);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_server_config_port_preserved(port in 1024u16..65535) {
            let addr: SocketAddr = format!("127.0.0.1:{port}").parse().unwrap();
            let config = ServerConfig::default().with_address(addr);
            prop_assert_eq!(config.address.port(), port);
        }

        #[test]
        fn prop_predict_request_roundtrip(
            point in proptest::collection::vec(-100.0f32..100.0, 0..8)
        ) {
            let req = PredictRequest { point: point.clone() };
            let json = serde_json::to_string(&req).unwrap();
            let parsed: PredictRequest = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed.point, point);
        }

        #[test]
        fn prop_error_detail_roundtrip(msg in "[a-zA-Z0-9 ,]{1,80}") {
            let body = ErrorDetail::new(msg.clone());
            let json = serde_json::to_string(&body).unwrap();
            let parsed: ErrorDetail = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed.detail, msg);
        }
    }
}
