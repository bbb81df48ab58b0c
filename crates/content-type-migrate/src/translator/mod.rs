//! Translation of one source content type into a created target content type.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::element::build_request;
use crate::error::Result;
use crate::pacing::Pacer;
use crate::provenance::{ProcessedItem, ProvenanceRecorder};
use crate::source::{PrerequisiteTaxonomies, SourceContentType};
use crate::target::{ContentTypeClient, TargetContentType};

/// Builds, sends and records one content type at a time.
pub struct ContentTypeTranslator {
    client: Arc<dyn ContentTypeClient>,
    recorder: Arc<dyn ProvenanceRecorder>,
    pacer: Arc<dyn Pacer>,
    delay: Duration,
}

impl ContentTypeTranslator {
    /// Create a translator that pauses for `delay` after every request.
    pub fn new(
        client: Arc<dyn ContentTypeClient>,
        recorder: Arc<dyn ProvenanceRecorder>,
        pacer: Arc<dyn Pacer>,
        delay: Duration,
    ) -> Self {
        Self {
            client,
            recorder,
            pacer,
            delay,
        }
    }

    /// Create `content_type` in the target system.
    ///
    /// Fails before any request is sent if an element cannot be built or a
    /// URL slug has nothing to depend on. Client errors are returned as-is.
    pub async fn translate(
        &self,
        content_type: &SourceContentType,
        prerequisites: &PrerequisiteTaxonomies,
    ) -> Result<TargetContentType> {
        let request = build_request(content_type, prerequisites)?;

        info!(
            "Creating content type '{}' with {} of {} elements via {}",
            content_type.codename(),
            request.elements.len(),
            content_type.elements.len(),
            self.client.client_type()
        );

        let response = self.client.add_content_type(&request).await?;

        debug!(
            "Created '{}' as '{}' ({}), pausing {:?}",
            content_type.codename(),
            response.codename,
            response.id,
            self.delay
        );
        self.pacer.pause(self.delay).await;

        self.recorder.record(ProcessedItem::content_type_added(
            content_type,
            &response.codename,
        ));

        Ok(TargetContentType::from(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MigrateError;
    use crate::pacing::InstantPacer;
    use crate::provenance::{EntityKind, MemoryRecorder, ProcessingAction};
    use crate::source::{SourceElement, SourceElementType, SourceSystem, TaxonomyMapping};
    use crate::target::{
        AddContentTypeRequest, ContentTypeResponse, DryRunClient, ElementMode, ElementType,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Client that remembers requests and answers with a fixed codename prefix.
    #[derive(Default)]
    struct CapturingClient {
        requests: Mutex<Vec<AddContentTypeRequest>>,
    }

    impl CapturingClient {
        fn requests(&self) -> Vec<AddContentTypeRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ContentTypeClient for CapturingClient {
        async fn add_content_type(
            &self,
            request: &AddContentTypeRequest,
        ) -> Result<ContentTypeResponse> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(ContentTypeResponse {
                id: "target-id".into(),
                codename: format!("new_{}", request.name.to_lowercase()),
                name: request.name.clone(),
                elements: vec![serde_json::json!({ "type": "text" })],
            })
        }

        fn client_type(&self) -> &'static str {
            "capturing"
        }
    }

    struct RejectingClient;

    #[async_trait]
    impl ContentTypeClient for RejectingClient {
        async fn add_content_type(
            &self,
            _request: &AddContentTypeRequest,
        ) -> Result<ContentTypeResponse> {
            Err(MigrateError::remote(403, "Forbidden"))
        }

        fn client_type(&self) -> &'static str {
            "rejecting"
        }
    }

    fn article() -> SourceContentType {
        let mut tags = SourceElement::new("Tags", "tags", SourceElementType::Taxonomy);
        tags.taxonomy_group = Some("topics".into());

        SourceContentType {
            system: SourceSystem {
                name: "Article".into(),
                codename: "article".into(),
                id: Some("src-id".into()),
            },
            elements: vec![
                SourceElement::new("Title", "title", SourceElementType::Text),
                SourceElement::new("Slug", "slug", SourceElementType::UrlSlug),
                SourceElement::new("Related", "related", SourceElementType::ModularContent),
                SourceElement::new("Tips", "tips", SourceElementType::from("guidelines")),
                tags,
            ],
        }
    }

    fn prerequisites() -> PrerequisiteTaxonomies {
        PrerequisiteTaxonomies::new(vec![TaxonomyMapping::new("topics", "site_topics")])
    }

    struct Harness {
        client: Arc<CapturingClient>,
        recorder: Arc<MemoryRecorder>,
        pacer: Arc<InstantPacer>,
        translator: ContentTypeTranslator,
    }

    fn harness() -> Harness {
        let client = Arc::new(CapturingClient::default());
        let recorder = Arc::new(MemoryRecorder::new());
        let pacer = Arc::new(InstantPacer::new());
        let translator = ContentTypeTranslator::new(
            client.clone(),
            recorder.clone(),
            pacer.clone(),
            Duration::from_millis(300),
        );
        Harness {
            client,
            recorder,
            pacer,
            translator,
        }
    }

    #[tokio::test]
    async fn test_translate_sends_resolved_request() {
        let h = harness();
        let imported = h.translator.translate(&article(), &prerequisites()).await.unwrap();

        assert_eq!(imported.system.codename, "new_article");
        assert_eq!(imported.system.id, "target-id");
        assert_eq!(imported.system.name, "Article");
        assert_eq!(imported.elements.len(), 1);

        let requests = h.client.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.name, "Article");

        let types: Vec<_> = request.elements.iter().map(|e| e.element_type).collect();
        assert_eq!(
            types,
            vec![
                ElementType::Text,
                ElementType::UrlSlug,
                ElementType::ModularContent,
                ElementType::Taxonomy
            ]
        );
        let title_id = request.elements[0].external_id.as_str();
        let slug_dep = request.elements[1].depends_on.as_ref().unwrap();
        assert_eq!(slug_dep.element.external_id.as_deref(), Some(title_id));
        assert_eq!(request.elements[2].mode, Some(ElementMode::Multiple));
        assert_eq!(
            request.elements[3].taxonomy_group.as_ref().unwrap().codename,
            "site_topics"
        );
    }

    #[tokio::test]
    async fn test_translate_pauses_and_records() {
        let h = harness();
        h.translator.translate(&article(), &prerequisites()).await.unwrap();

        assert_eq!(h.pacer.pauses(), vec![Duration::from_millis(300)]);

        let items = h.recorder.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_type, EntityKind::ContentType);
        assert_eq!(items[0].action, ProcessingAction::Add);
        assert_eq!(items[0].name, "new_article");
        assert_eq!(items[0].source_codename, "article");
    }

    #[tokio::test]
    async fn test_translation_failure_sends_nothing() {
        let h = harness();
        let mut landing = article();
        landing.elements.remove(0);

        let err = h
            .translator
            .translate(&landing, &prerequisites())
            .await
            .unwrap_err();

        assert!(matches!(err, MigrateError::UnresolvedSlugDependency { .. }));
        assert!(h.client.requests().is_empty());
        assert!(h.pacer.pauses().is_empty());
        assert!(h.recorder.is_empty());
    }

    #[tokio::test]
    async fn test_missing_prerequisite_sends_nothing() {
        let h = harness();
        let err = h
            .translator
            .translate(&article(), &PrerequisiteTaxonomies::default())
            .await
            .unwrap_err();

        assert!(matches!(err, MigrateError::UnresolvedTaxonomyReference { .. }));
        assert!(h.client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_remote_failure_propagates_unchanged() {
        let recorder = Arc::new(MemoryRecorder::new());
        let translator = ContentTypeTranslator::new(
            Arc::new(RejectingClient),
            recorder.clone(),
            Arc::new(InstantPacer::new()),
            Duration::ZERO,
        );

        let err = translator
            .translate(&article(), &prerequisites())
            .await
            .unwrap_err();

        assert!(matches!(err, MigrateError::RemoteCreation { status: 403, .. }));
        assert!(recorder.is_empty());
    }

    #[tokio::test]
    async fn test_dry_run_client_round_trip() {
        let recorder = Arc::new(MemoryRecorder::new());
        let translator = ContentTypeTranslator::new(
            Arc::new(DryRunClient::new()),
            recorder.clone(),
            Arc::new(InstantPacer::new()),
            Duration::ZERO,
        );

        let imported = translator.translate(&article(), &prerequisites()).await.unwrap();
        assert_eq!(imported.system.codename, "article");
        assert_eq!(imported.elements.len(), 4);
        assert_eq!(recorder.len(), 1);
    }
}
