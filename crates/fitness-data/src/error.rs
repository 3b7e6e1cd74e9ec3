//! Validation Error Types

use thiserror::Error;

/// Errors during sample validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A configured range has its bounds the wrong way round
    #[error("Invalid {field} range: min {min} is greater than max {max}")]
    InvalidRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// UTC offset outside what a timezone can express
    #[error("Invalid UTC offset: {0} seconds")]
    InvalidOffset(i32),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}
