//! Read-only Workout Routine Document

use crate::StorageError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Workout routines stored as a PDF with an embedded text layer
#[derive(Debug, Clone)]
pub struct RoutineDocument {
    path: PathBuf,
}

impl RoutineDocument {
    /// Point at an existing routine PDF
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

    /// Text of every page, concatenated in page order
    pub fn text(&self) -> Result<String, StorageError> {
        let bytes = std::fs::read(&self.path)?;
        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| StorageError::Pdf(e.to_string()))?;

        debug!("Extracted {} pages from {}", pages.len(), self.path.display());
        Ok(pages.concat())
    }
}
