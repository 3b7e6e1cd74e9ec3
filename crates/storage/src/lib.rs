//! Storage Layer
//!
//! Append-only CSV sink for fetched fitness samples, plus read-only access to
//! the pre-existing workout CSV, SQLite profile and routine PDF datasets.

mod csv_sink;
mod profiles;
mod routines;
mod workouts;

pub use csv_sink::CsvSink;
pub use profiles::{ProfileRepository, UserProfile};
pub use routines::RoutineDocument;
pub use workouts::{WorkoutDataset, WorkoutRecord};

use std::path::PathBuf;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::DatabaseError(err.to_string())
    }
}
