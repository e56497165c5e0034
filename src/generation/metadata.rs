//! Metadata collection and the `_metadata.json` document

use crate::generation::accumulator::{EditionAccumulator, EditionMetadata};
use crate::io::error::{GenerationError, Result, WithPath};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch, or zero if the clock is set before it
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}

/// Accumulates edition records for one run and persists them as JSON
#[derive(Debug, Clone)]
pub struct MetadataRecorder {
    path: PathBuf,
    records: Vec<EditionMetadata>,
}

impl MetadataRecorder {
    /// Create an empty recorder writing to `path`
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: Vec::new(),
        }
    }

    /// Finalize an edition's selections with the current time and append the record
    pub fn add_metadata(&mut self, edition: u32, accumulator: EditionAccumulator) {
        self.push(accumulator.into_metadata(edition, now_millis()));
    }

    /// Append an already finalized record
    pub fn push(&mut self, record: EditionMetadata) {
        self.records.push(record);
    }

    /// Records in edition order
    pub fn records(&self) -> &[EditionMetadata] {
        &self.records
    }

    /// Where the document is written
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the whole collection as a compact JSON array
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.records).map_err(|source| GenerationError::Metadata {
            path: self.path.clone(),
            source,
        })
    }

    /// Create or overwrite the metadata document
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails
    pub fn write(&self) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(&self.path, json).with_path(&self.path, "write metadata")?;
        tracing::debug!(
            path = %self.path.display(),
            editions = self.records.len(),
            "wrote metadata"
        );
        Ok(())
    }
}
