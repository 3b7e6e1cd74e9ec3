//! Range Validation for User Ids and Samples

use crate::error::ValidationError;
use crate::sample::{FitnessSample, UserId};
use serde::{Deserialize, Serialize};

/// Inclusive value ranges for users and generated readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleRanges {
    /// Valid user ids
    pub user_id: (u32, u32),
    /// Step count range
    pub steps: (u32, u32),
    /// Heart rate range (bpm)
    pub heart_rate: (u32, u32),
}

impl Default for SampleRanges {
    fn default() -> Self {
        Self {
            user_id: (1, 10),
            steps: (1000, 10000),
            heart_rate: (60, 120),
        }
    }
}

impl SampleRanges {
    /// Check that every range has `min <= max`
    pub fn check(&self) -> Result<(), ValidationError> {
        for (field, (min, max)) in [
            ("user_id", self.user_id),
            ("steps", self.steps),
            ("heart_rate", self.heart_rate),
        ] {
            if min > max {
                return Err(ValidationError::InvalidRange {
                    field,
                    min: i64::from(min),
                    max: i64::from(max),
                });
            }
        }
        Ok(())
    }
}

/// Result of validating a whole sample
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether all values are valid
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            fields_checked,
        }
    }
}

/// Validator for user ids and fitness samples
#[derive(Debug, Clone, Default)]
pub struct Validator {
    ranges: SampleRanges,
}

impl Validator {
    /// Create a new validator with given ranges
    pub fn new(ranges: SampleRanges) -> Self {
        Self { ranges }
    }

    /// Ranges this validator enforces
    pub fn ranges(&self) -> &SampleRanges {
        &self.ranges
    }

    /// Validate a single value against an inclusive range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: i64,
        range: (u32, u32),
    ) -> Result<(), ValidationError> {
        let (min, max) = (i64::from(range.0), i64::from(range.1));
        if value < min || value > max {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min,
                max,
            })
        } else {
            Ok(())
        }
    }

    /// Validate a raw user id
    pub fn validate_user_id(&self, raw: i64) -> Result<UserId, ValidationError> {
        self.validate_range("user_id", raw, self.ranges.user_id)?;
        let id = u32::try_from(raw).map_err(|e| ValidationError::InvalidFormat(e.to_string()))?;
        Ok(UserId::new_unchecked(id))
    }

    /// Validate step count
    pub fn validate_steps(&self, steps: u32) -> Result<(), ValidationError> {
        self.validate_range("steps", i64::from(steps), self.ranges.steps)
    }

    /// Validate heart rate
    pub fn validate_heart_rate(&self, heart_rate: u32) -> Result<(), ValidationError> {
        self.validate_range("heart_rate", i64::from(heart_rate), self.ranges.heart_rate)
    }

    /// Validate every field of a sample, collecting all failures
    pub fn validate_sample(&self, sample: &FitnessSample) -> ValidationResult {
        let errors: Vec<_> = [
            self.validate_user_id(i64::from(sample.user_id.get())).err(),
            self.validate_steps(sample.steps).err(),
            self.validate_heart_rate(sample.heart_rate).err(),
        ]
        .into_iter()
        .flatten()
        .collect();

        ValidationResult::from_errors(errors, 3)
    }
}
