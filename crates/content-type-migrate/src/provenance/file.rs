//! Provenance log written to a JSON file.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

use super::{ProcessedItem, ProvenanceRecorder};
use crate::error::Result;

/// Collects records in memory and writes them to a JSON file on [`flush`](Self::flush).
///
/// Recording itself never touches the file system, so it cannot fail.
#[derive(Debug)]
pub struct JsonFileRecorder {
    path: PathBuf,
    items: Mutex<Vec<ProcessedItem>>,
}

impl JsonFileRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            items: Mutex::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write all records so far as a pretty JSON array (atomic write).
    pub fn flush(&self) -> Result<()> {
        let items = self
            .items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        let content = serde_json::to_string_pretty(&items)?;

        // Atomic write: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, &content)?;
        std::fs::rename(&temp_path, &self.path)?;

        debug!("Wrote {} provenance records to {:?}", items.len(), self.path);
        Ok(())
    }

    /// Read a provenance log written by [`flush`](Self::flush).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<ProcessedItem>> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl ProvenanceRecorder for JsonFileRecorder {
    fn record(&self, item: ProcessedItem) {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(item);
    }

    fn recorder_type(&self) -> &'static str {
        "json-file"
    }
}
