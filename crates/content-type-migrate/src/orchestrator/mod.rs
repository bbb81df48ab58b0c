//! Import orchestrator - sequences content type creation for a whole batch.

use crate::config::ImportConfig;
use crate::error::Result;
use crate::pacing::{Pacer, TokioPacer};
use crate::provenance::{NoOpRecorder, ProvenanceRecorder};
use crate::source::{PrerequisiteTaxonomies, SourceContentType};
use crate::target::{ContentTypeClient, TargetContentType};
use crate::translator::ContentTypeTranslator;
use crate::typemap::map_element_type;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// A source content type paired with what it became in the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    pub original_item: SourceContentType,
    pub imported_item: TargetContentType,
}

/// Summary of a completed import run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    /// Unique run identifier.
    pub run_id: String,

    /// When the import started.
    pub started_at: DateTime<Utc>,

    /// When the import completed.
    pub completed_at: DateTime<Utc>,

    /// Total duration in seconds.
    pub duration_seconds: f64,

    /// Content types created.
    pub content_types_imported: usize,

    /// Elements created across all content types.
    pub elements_created: usize,

    /// Source elements left out because their type is unsupported.
    pub elements_skipped: usize,

    /// Per content type results, in input order.
    pub results: Vec<ImportResult>,
}

impl ImportReport {
    /// Serialize the report as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Content type import orchestrator.
pub struct Orchestrator {
    client: Arc<dyn ContentTypeClient>,
    recorder: Arc<dyn ProvenanceRecorder>,
    pacer: Arc<dyn Pacer>,
    config: ImportConfig,
}

impl Orchestrator {
    /// Create an orchestrator that sleeps between requests and keeps no provenance.
    pub fn new(client: Arc<dyn ContentTypeClient>, config: ImportConfig) -> Self {
        Self {
            client,
            recorder: Arc::new(NoOpRecorder::new()),
            pacer: Arc::new(TokioPacer),
            config,
        }
    }

    /// Set the provenance recorder.
    pub fn with_recorder(mut self, recorder: Arc<dyn ProvenanceRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    /// Set the pacer used between requests.
    pub fn with_pacer(mut self, pacer: Arc<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    fn translator(&self) -> ContentTypeTranslator {
        ContentTypeTranslator::new(
            self.client.clone(),
            self.recorder.clone(),
            self.pacer.clone(),
            self.config.inter_request_delay(),
        )
    }

    /// Create every content type, strictly in input order.
    ///
    /// Each request completes, including its pause, before the next one is
    /// sent. The first failure stops the batch and is returned; content types
    /// created before it are not rolled back.
    pub async fn import_content_types(
        &self,
        content_types: &[SourceContentType],
        prerequisites: &PrerequisiteTaxonomies,
    ) -> Result<Vec<ImportResult>> {
        let translator = self.translator();
        let mut results = Vec::with_capacity(content_types.len());

        for (i, content_type) in content_types.iter().enumerate() {
            info!(
                "[{}/{}] Importing content type '{}'",
                i + 1,
                content_types.len(),
                content_type.codename()
            );
            let imported_item = translator.translate(content_type, prerequisites).await?;
            results.push(ImportResult {
                original_item: content_type.clone(),
                imported_item,
            });
        }

        Ok(results)
    }

    /// Run a full import and summarize it.
    pub async fn run(
        &self,
        content_types: &[SourceContentType],
        prerequisites: &PrerequisiteTaxonomies,
    ) -> Result<ImportReport> {
        let started_at = Utc::now();
        let run_id = uuid::Uuid::new_v4().to_string();

        info!(
            "Starting import run {}: {} content types, {} prerequisite taxonomies, {}ms between requests",
            run_id,
            content_types.len(),
            prerequisites.len(),
            self.config.inter_request_delay_ms
        );

        let results = self.import_content_types(content_types, prerequisites).await?;

        let completed_at = Utc::now();
        let duration_seconds = (completed_at - started_at).num_milliseconds() as f64 / 1000.0;
        let elements_created: usize = results.iter().map(|r| r.imported_item.elements.len()).sum();
        let elements_skipped = results
            .iter()
            .flat_map(|r| &r.original_item.elements)
            .filter(|e| map_element_type(&e.element_type).is_none())
            .count();

        info!(
            "Import run {} completed: {} content types in {:.2}s",
            run_id,
            results.len(),
            duration_seconds
        );

        Ok(ImportReport {
            run_id,
            started_at,
            completed_at,
            duration_seconds,
            content_types_imported: results.len(),
            elements_created,
            elements_skipped,
            results,
        })
    }
}

/// Import `content_types` into the target system.
///
/// Pauses for the configured delay after every request and hands one
/// provenance record per created content type to `recorder`. Use
/// [`Orchestrator`] to inject a different pacer.
pub async fn import_content_types(
    target: Arc<dyn ContentTypeClient>,
    content_types: &[SourceContentType],
    prerequisites: &PrerequisiteTaxonomies,
    config: &ImportConfig,
    recorder: Arc<dyn ProvenanceRecorder>,
) -> Result<Vec<ImportResult>> {
    Orchestrator::new(target, config.clone())
        .with_recorder(recorder)
        .import_content_types(content_types, prerequisites)
        .await
}
