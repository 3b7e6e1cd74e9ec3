//! Read-only Workout Dataset

use crate::StorageError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One completed workout. Columns other than these are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub user_id: u32,
    pub workout_type: String,
    pub duration_minutes: f64,
}

/// Workout history stored as CSV
#[derive(Debug, Clone)]
pub struct WorkoutDataset {
    path: PathBuf,
}

impl WorkoutDataset {
    /// Point at an existing workout file
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if !path.is_file() {
            return Err(StorageError::NotFound(path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All workouts logged by `user_id`, in file order
    pub fn for_user(&self, user_id: u32) -> Result<Vec<WorkoutRecord>, StorageError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let mut matches = Vec::new();
        for row in reader.deserialize::<WorkoutRecord>() {
            let record = row?;
            if record.user_id == user_id {
                matches.push(record);
            }
        }

        debug!("Found {} workouts for user {}", matches.len(), user_id);
        Ok(matches)
    }
}
