//! Provenance records of what the import created.
//!
//! Every created content type is reported to a [`ProvenanceRecorder`]. Recording
//! is fire-and-forget: recorders never fail the import.
//!
//! - [`MemoryRecorder`]: keeps records in memory
//! - [`JsonFileRecorder`]: keeps records in memory and writes them as JSON on flush
//! - [`NoOpRecorder`]: discards records

mod file;
mod noop;

pub use file::JsonFileRecorder;
pub use noop::NoOpRecorder;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::source::SourceContentType;

/// Kind of entity a record refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "content type")]
    ContentType,
}

/// What was done to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingAction {
    Add,
}

/// One provenance entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedItem {
    #[serde(rename = "type")]
    pub item_type: EntityKind,

    pub action: ProcessingAction,

    /// Codename of the created entity in the target system.
    pub name: String,

    /// Codename of the source entity.
    pub source_codename: String,

    /// The source entity as it was read.
    pub data: serde_json::Value,

    pub processed_at: DateTime<Utc>,
}

impl ProcessedItem {
    /// Record for a content type created from `source`.
    pub fn content_type_added(source: &SourceContentType, target_codename: impl Into<String>) -> Self {
        Self {
            item_type: EntityKind::ContentType,
            action: ProcessingAction::Add,
            name: target_codename.into(),
            source_codename: source.codename().to_string(),
            data: serde_json::to_value(source).unwrap_or_default(),
            processed_at: Utc::now(),
        }
    }
}

/// Sink for provenance records.
pub trait ProvenanceRecorder: Send + Sync {
    /// Record one item. Must not fail or panic.
    fn record(&self, item: ProcessedItem);

    /// Get the recorder type name for logging.
    fn recorder_type(&self) -> &'static str;
}

/// Append-only in-memory log.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    items: Mutex<Vec<ProcessedItem>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all records so far, in recording order.
    pub fn items(&self) -> Vec<ProcessedItem> {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProvenanceRecorder for MemoryRecorder {
    fn record(&self, item: ProcessedItem) {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(item);
    }

    fn recorder_type(&self) -> &'static str {
        "memory"
    }
}
