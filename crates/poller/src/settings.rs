//! Poller Configuration

use crate::PollerError;
use config::{Config, Environment, File};
use fitness_data::SampleRanges;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for the fetch-and-store loop
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Fitness data endpoint
    pub url: String,
    /// User to request; the server picks one when unset
    pub user_id: Option<u32>,
    /// Number of fetch attempts
    pub cycles: usize,
    /// Pause between attempts in milliseconds
    pub interval_ms: u64,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// CSV file receiving samples
    pub output: PathBuf,
    /// Emit JSON log lines
    pub json_logs: bool,
    /// Ranges a fetched sample must respect
    pub ranges: SampleRanges,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:5000/fitness-data".to_string(),
            user_id: None,
            cycles: 10,
            interval_ms: 1000,
            request_timeout_ms: 5000,
            output: PathBuf::from("fitness_data.csv"),
            json_logs: false,
            ranges: SampleRanges::default(),
        }
    }
}

impl PollerConfig {
    /// Environment variable prefix
    pub const ENV_PREFIX: &'static str = "FITNESS_POLLER";

    /// Load configuration, reading `path` if given
    pub fn load(path: Option<&Path>) -> Result<Self, PollerError> {
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
            .map_err(|e| PollerError::Config(e.to_string()))
    }

    /// Pause between attempts
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Per-request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PollerConfig::default();
        assert_eq!(config.cycles, 10);
        assert_eq!(config.interval(), Duration::from_secs(1));
        assert_eq!(config.output, PathBuf::from("fitness_data.csv"));
        assert!(config.user_id.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poller.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "cycles = 3\nuser_id = 4\ninterval_ms = 250").unwrap();

        let config = PollerConfig::load(Some(&path)).unwrap();
        assert_eq!(config.cycles, 3);
        assert_eq!(config.user_id, Some(4));
        assert_eq!(config.interval(), Duration::from_millis(250));
        assert_eq!(config.url, "http://127.0.0.1:5000/fitness-data");
    }
}
