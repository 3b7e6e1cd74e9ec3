//! Fitness Sample Model
//!
//! Provides the fitness sample type shared by the mock endpoint and the
//! polling client, range validation for user ids and readings, and the
//! randomized generator behind the mock endpoint.

mod error;
mod generator;
mod sample;
mod validator;

pub use error::ValidationError;
pub use generator::{SampleGenerator, DEFAULT_UTC_OFFSET_SECONDS};
pub use sample::{FitnessSample, UserId, SAMPLE_FIELDS};
pub use validator::{SampleRanges, ValidationResult, Validator};
