//! Fetch-and-Store Loop

use crate::client::FitnessClient;
use crate::settings::PollerConfig;
use crate::PollerError;
use serde::Serialize;
use storage::CsvSink;
use tracing::{info, warn};

/// Outcome of a polling run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PollSummary {
    /// Fetch attempts made
    pub attempted: usize,
    /// Samples appended to the sink
    pub stored: usize,
    /// Attempts that produced no sample
    pub failed: usize,
}

/// Fixed-count poller writing samples to CSV
pub struct Poller {
    client: FitnessClient,
    sink: CsvSink,
    config: PollerConfig,
}

impl Poller {
    /// Build the client and open the sink, creating the header if needed
    pub fn new(config: PollerConfig) -> Result<Self, PollerError> {
        let client = FitnessClient::new(
            config.url.clone(),
            config.request_timeout(),
            config.ranges,
        )?;
        let sink = CsvSink::open(&config.output)?;
        Ok(Self {
            client,
            sink,
            config,
        })
    }

    /// Sink receiving samples
    pub fn sink(&self) -> &CsvSink {
        &self.sink
    }

    /// Run every configured cycle.
    ///
    /// Fetch failures are logged and counted; the run continues with the next
    /// cycle. A failure to write the CSV ends the run with an error.
    pub async fn run(&self) -> Result<PollSummary, PollerError> {
        info!(
            "Polling {} for {} cycles every {:?}, writing to {}",
            self.client.url(),
            self.config.cycles,
            self.config.interval(),
            self.sink.path().display()
        );

        let mut summary = PollSummary::default();

        for cycle in 1..=self.config.cycles {
            summary.attempted += 1;

            match self.client.fetch(self.config.user_id).await {
                Ok(sample) => {
                    self.sink.append(&sample)?;
                    summary.stored += 1;
                    info!(
                        cycle,
                        user_id = sample.user_id.get(),
                        steps = sample.steps,
                        heart_rate = sample.heart_rate,
                        timestamp = %sample.timestamp,
                        "Data inserted"
                    );
                }
                Err(e) => {
                    summary.failed += 1;
                    warn!("Cycle {}/{} failed: {}", cycle, self.config.cycles, e);
                }
            }

            if cycle < self.config.cycles {
                tokio::time::sleep(self.config.interval()).await;
            }
        }

        info!(
            "Polling finished: {} stored, {} failed",
            summary.stored, summary.failed
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_cycles_only_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let config = PollerConfig {
            cycles: 0,
            output: dir.path().join("fitness_data.csv"),
            ..PollerConfig::default()
        };

        let poller = Poller::new(config).unwrap();
        let summary = poller.run().await.unwrap();

        assert_eq!(summary, PollSummary::default());
        assert_eq!(poller.sink().row_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_server_counts_failures() {
        // Grab a free port, then close it so connections are refused
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let dir = tempfile::tempdir().unwrap();
        let config = PollerConfig {
            url: format!("http://{addr}/fitness-data"),
            cycles: 3,
            interval_ms: 0,
            request_timeout_ms: 500,
            output: dir.path().join("fitness_data.csv"),
            ..PollerConfig::default()
        };

        let poller = Poller::new(config).unwrap();
        let summary = poller.run().await.unwrap();

        assert_eq!(summary.attempted, 3);
        assert_eq!(summary.failed, 3);
        assert_eq!(summary.stored, 0);
        assert_eq!(poller.sink().row_count().unwrap(), 0);
    }
}
