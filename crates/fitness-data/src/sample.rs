//! Fitness Sample Types

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// CSV/JSON column order of a sample
pub const SAMPLE_FIELDS: [&str; 4] = ["user_id", "timestamp", "steps", "heart_rate"];

/// Identifier of a simulated user.
///
/// Constructed through [`crate::Validator::validate_user_id`] on the server side.
/// Deserialized values are not range-checked; run them through
/// [`crate::Validator::validate_sample`] before trusting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    pub(crate) const fn new_unchecked(id: u32) -> Self {
        Self(id)
    }

    /// Raw numeric id
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One simulated reading of steps and heart rate for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessSample {
    /// User the reading belongs to
    pub user_id: UserId,
    /// Reading time, RFC 3339 with UTC offset
    #[serde(serialize_with = "serialize_micros")]
    pub timestamp: DateTime<FixedOffset>,
    /// Step count
    pub steps: u32,
    /// Heart rate in beats per minute
    pub heart_rate: u32,
}

/// RFC 3339 with six fractional digits, even when they end in zeros.
/// Whole seconds carry no fraction.
fn serialize_micros<S: Serializer>(
    timestamp: &DateTime<FixedOffset>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let format = if timestamp.timestamp_subsec_micros() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    serializer.serialize_str(&timestamp.to_rfc3339_opts(format, false))
}
