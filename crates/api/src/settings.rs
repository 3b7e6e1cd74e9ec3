//! Server Configuration
//!
//! Layered as defaults, then an optional TOML file, then `FITNESS_API__*`
//! environment variables.

use crate::ApiError;
use config::{Config, Environment, File};
use fitness_data::{SampleRanges, DEFAULT_UTC_OFFSET_SECONDS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Mock API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Listen address
    pub bind: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Offset applied to sample timestamps (seconds east of UTC)
    pub utc_offset_seconds: i32,
    /// Valid user ids and generated value ranges
    pub ranges: SampleRanges,
    /// Expose Prometheus metrics at `/metrics`
    pub enable_metrics: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
            log_format: LogFormat::Pretty,
            utc_offset_seconds: DEFAULT_UTC_OFFSET_SECONDS,
            ranges: SampleRanges::default(),
            enable_metrics: true,
        }
    }
}

impl ApiConfig {
    /// Environment variable prefix
    pub const ENV_PREFIX: &'static str = "FITNESS_API";

    /// Load configuration, reading `path` if given
    pub fn load(path: Option<&Path>) -> Result<Self, ApiError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(Self::ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| ApiError::Config(e.to_string()))
    }
}
