//! Fitness Data Poller
//!
//! Fetches samples from the mock fitness endpoint a fixed number of times and
//! appends each one to a CSV file.

mod client;
mod runner;
mod settings;

pub use client::{FetchError, FitnessClient};
pub use runner::{PollSummary, Poller};
pub use settings::PollerConfig;

use storage::StorageError;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Poller errors
#[derive(Debug, Error)]
pub enum PollerError {
    /// HTTP client could not be built
    #[error("Client error: {0}")]
    Client(#[from] FetchError),

    /// Writing the sample file failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Initialize logging. `RUST_LOG` overrides the default `info` level.
pub fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        eprintln!("Tracing subscriber already set: {e}");
    }
}
