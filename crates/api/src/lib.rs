//! Mock Fitness API Server
//!
//! REST endpoint returning randomized fitness telemetry for simulated users.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use fitness_data::{SampleGenerator, ValidationError, Validator};
use metrics::counter;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod settings;
pub mod routes;

pub use settings::{ApiConfig, LogFormat};

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested user outside the configured range
    #[error("Invalid user_id. Must be between {min} and {max}.")]
    InvalidUserId { min: u32, max: u32 },

    /// Query string could not be decoded
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// Socket or listener failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Config(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidUserId { .. } | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Config(_) | ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        counter!("fitness_requests_total", "status" => status.as_u16().to_string()).increment(1);

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Application state shared across handlers
pub struct AppState {
    /// Sample generator
    pub generator: SampleGenerator,
    /// User id validator
    pub validator: Validator,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
    /// Samples returned since start
    pub samples_served: u64,
    /// Prometheus handle, when a recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

/// State handle passed to handlers
pub type SharedState = Arc<RwLock<AppState>>;

impl AppState {
    /// Create state from configuration
    pub fn new(config: &ApiConfig, metrics: Option<PrometheusHandle>) -> Result<Self, ApiError> {
        let generator = SampleGenerator::new(config.ranges, config.utc_offset_seconds)?;
        Ok(Self::with_generator(
            generator,
            Validator::new(config.ranges),
            metrics,
        ))
    }

    /// Create state around an existing generator
    pub fn with_generator(
        generator: SampleGenerator,
        validator: Validator,
        metrics: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            generator,
            validator,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
            samples_served: 0,
            metrics,
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub samples_served: u64,
}

/// Create the application router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/fitness-data", get(routes::fitness::get_fitness_data))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        samples_served: state.samples_served,
    })
}

/// Prometheus exposition handler
async fn metrics_handler(State(state): State<SharedState>) -> Response {
    let state = state.read().await;
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "metrics are disabled" })),
        )
            .into_response(),
    }
}

/// Initialize logging. `RUST_LOG` overrides the default `info` level.
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if let Err(e) = result {
        eprintln!("Tracing subscriber already set: {e}");
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the server until Ctrl-C
pub async fn run_server(
    config: &ApiConfig,
    metrics: Option<PrometheusHandle>,
) -> Result<(), ApiError> {
    let state = Arc::new(RwLock::new(AppState::new(config, metrics)?));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("Starting mock fitness API on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
