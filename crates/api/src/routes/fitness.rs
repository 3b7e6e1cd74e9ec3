//! Fitness Data Route

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use fitness_data::FitnessSample;
use metrics::counter;
use tracing::debug;

use crate::{ApiError, SharedState};

/// Query parameters for the fitness data endpoint
#[derive(Debug, Default)]
pub struct FitnessQuery {
    /// Requested user. Kept as text so a non-integer falls back to a random user.
    pub user_id: Option<String>,
}

/// How the `user_id` parameter reads as a number
#[derive(Debug, PartialEq, Eq)]
enum RequestedUser {
    /// No usable integer; pick a random user
    Any,
    /// An integer that fits in `i64`
    Id(i64),
    /// An integer too large for `i64`, never a valid user
    Overflow,
}

impl FitnessQuery {
    /// Build from raw query pairs. A repeated `user_id` keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let user_id = pairs
            .into_iter()
            .find(|(key, _)| key == "user_id")
            .map(|(_, value)| value);
        Self { user_id }
    }

    fn requested_user(&self) -> RequestedUser {
        let Some(raw) = self.user_id.as_deref() else {
            return RequestedUser::Any;
        };
        let text = raw.trim();
        if let Ok(id) = text.parse::<i64>() {
            return RequestedUser::Id(id);
        }

        let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            RequestedUser::Overflow
        } else {
            debug!("Ignoring non-integer user_id {:?}", raw);
            RequestedUser::Any
        }
    }
}

/// Get a simulated fitness sample
pub async fn get_fitness_data(
    State(state): State<SharedState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<FitnessSample>, ApiError> {
    let Query(pairs) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let params = FitnessQuery::from_pairs(pairs);

    let mut state = state.write().await;
    let (min, max) = state.validator.ranges().user_id;

    let user_id = match params.requested_user() {
        RequestedUser::Id(raw) => state
            .validator
            .validate_user_id(raw)
            .map_err(|_| ApiError::InvalidUserId { min, max })?,
        RequestedUser::Overflow => return Err(ApiError::InvalidUserId { min, max }),
        RequestedUser::Any => state.generator.random_user_id(),
    };

    let sample = state.generator.generate(user_id);
    state.samples_served += 1;

    counter!("fitness_requests_total", "status" => "200").increment(1);
    counter!("fitness_samples_generated_total").increment(1);

    Ok(Json(sample))
}
