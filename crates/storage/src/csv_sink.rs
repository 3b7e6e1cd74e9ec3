//! Append-only CSV Sink

use crate::StorageError;
use fitness_data::{FitnessSample, SAMPLE_FIELDS};
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// CSV file receiving one row per fetched sample
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    /// Open the sink, writing the header only if the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => {
                let mut writer = csv::Writer::from_writer(file);
                writer.write_record(SAMPLE_FIELDS)?;
                writer.flush()?;
                info!("Created sample file {}", path.display());
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("Appending to existing sample file {}", path.display());
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Self { path })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a single sample row
    pub fn append(&self, sample: &FitnessSample) -> Result<(), StorageError> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer.serialize(sample)?;
        writer.flush()?;
        Ok(())
    }

    /// Number of data rows, header excluded
    pub fn row_count(&self) -> Result<usize, StorageError> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut count = 0;
        for record in reader.records() {
            record?;
            count += 1;
        }
        Ok(count)
    }
}
