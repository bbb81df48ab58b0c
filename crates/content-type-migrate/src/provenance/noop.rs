//! Recorder that discards provenance records.

use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

use super::{ProcessedItem, ProvenanceRecorder};

/// Recorder that doesn't keep anything.
///
/// Logs a warning on first use.
pub struct NoOpRecorder {
    warned: AtomicBool,
}

impl NoOpRecorder {
    /// Create a new no-op recorder.
    pub fn new() -> Self {
        Self {
            warned: AtomicBool::new(false),
        }
    }

    fn warn_once(&self) {
        if !self.warned.swap(true, Ordering::SeqCst) {
            warn!("Using no-op provenance recorder: created items will not be logged.");
        }
    }
}

impl Default for NoOpRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvenanceRecorder for NoOpRecorder {
    fn record(&self, _item: ProcessedItem) {
        self.warn_once();
    }

    fn recorder_type(&self) -> &'static str {
        "noop"
    }
}
