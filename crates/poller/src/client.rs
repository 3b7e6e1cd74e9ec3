//! HTTP Client for the Fitness Endpoint

use fitness_data::{FitnessSample, SampleRanges, ValidationError, Validator};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors from a single fetch
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, timeout, or body decoding failure
    #[error("Error fetching data: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with something other than 200
    #[error("Received status code {code}: {}", .message.as_deref().unwrap_or("no error message"))]
    Status { code: u16, message: Option<String> },

    /// Payload parsed but carries out-of-range values
    #[error("Invalid sample: {}", format_errors(.0))]
    InvalidSample(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for `GET /fitness-data`
pub struct FitnessClient {
    http: reqwest::Client,
    url: String,
    validator: Validator,
}

impl FitnessClient {
    /// Create a client for `url`
    pub fn new(
        url: impl Into<String>,
        timeout: Duration,
        ranges: SampleRanges,
    ) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
            validator: Validator::new(ranges),
        })
    }

    /// Endpoint this client polls
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch one sample, optionally for a specific user
    pub async fn fetch(&self, user_id: Option<u32>) -> Result<FitnessSample, FetchError> {
        let mut request = self.http.get(&self.url);
        if let Some(id) = user_id {
            request = request.query(&[("user_id", id)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            let message = response.json::<ErrorBody>().await.ok().map(|b| b.error);
            return Err(FetchError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let sample: FitnessSample = response.json().await?;
        let result = self.validator.validate_sample(&sample);
        if !result.valid {
            return Err(FetchError::InvalidSample(result.errors));
        }

        debug!("Fetched sample {:?}", sample);
        Ok(sample)
    }
}
