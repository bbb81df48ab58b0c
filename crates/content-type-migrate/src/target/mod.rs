//! Target schema types and the Management API client abstraction.
//!
//! Request types serialize with the Management API's field names so they can
//! be posted as-is. The [`ContentTypeClient`] trait is the seam the translator
//! talks to; [`ManagementClient`] is the HTTP implementation and
//! [`DryRunClient`] answers locally without a remote system.

mod dry_run;
mod management;

pub use dry_run::DryRunClient;
pub use management::ManagementClient;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Locally generated identifier of an element that does not exist remotely yet.
///
/// The target system assigns its own ids only after creation; until then
/// elements in the same request reference each other through this value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalId(String);

impl ExternalId {
    /// Generate a fresh, globally unique external id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Element types understood by the target schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Text,
    Number,
    Asset,
    DateTime,
    RichText,
    UrlSlug,
    MultipleChoice,
    ModularContent,
    Taxonomy,
}

/// Cardinality of choice and linked-items elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementMode {
    Single,
    Multiple,
}

/// Reference object pointing at another element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl ElementReference {
    /// Reference an element of the same request by its external id.
    pub fn by_external_id(external_id: &ExternalId) -> Self {
        Self {
            external_id: Some(external_id.as_str().to_string()),
            ..Default::default()
        }
    }

    /// True when the reference names no element at all.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.codename.is_none() && self.external_id.is_none()
    }
}

/// `depends_on` payload of a URL slug element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependsOn {
    pub element: ElementReference,
}

/// Reference to a taxonomy group by codename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodenameReference {
    pub codename: String,
}

/// One option of a multiple choice element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionData {
    pub name: String,
}

/// Descriptor of one element in a content type creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementData {
    pub name: String,

    pub external_id: ExternalId,

    #[serde(rename = "type")]
    pub element_type: ElementType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ElementMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionData>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy_group: Option<CodenameReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DependsOn>,

    #[serde(default)]
    pub guidelines: String,
}

impl ElementData {
    /// Descriptor with a fresh external id and no type-specific payload.
    pub fn new(name: impl Into<String>, element_type: ElementType) -> Self {
        Self {
            name: name.into(),
            external_id: ExternalId::generate(),
            element_type,
            mode: None,
            options: None,
            taxonomy_group: None,
            depends_on: None,
            guidelines: String::new(),
        }
    }
}

/// Body of a content type creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddContentTypeRequest {
    pub name: String,
    pub elements: Vec<ElementData>,
}

/// Content type as returned by the target system after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeResponse {
    pub id: String,
    pub codename: String,
    pub name: String,

    /// Elements exactly as the target system returned them.
    #[serde(default)]
    pub elements: Vec<serde_json::Value>,
}

/// System metadata of a created content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSystem {
    pub id: String,
    pub codename: String,
    pub name: String,
}

/// Canonical form of a content type after it was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetContentType {
    pub system: TargetSystem,
    pub elements: Vec<serde_json::Value>,
}

impl From<ContentTypeResponse> for TargetContentType {
    fn from(response: ContentTypeResponse) -> Self {
        Self {
            system: TargetSystem {
                id: response.id,
                codename: response.codename,
                name: response.name,
            },
            elements: response.elements,
        }
    }
}

/// Creation endpoint of the target system.
///
/// Errors are propagated by callers without interpretation.
#[async_trait]
pub trait ContentTypeClient: Send + Sync {
    /// Create one content type.
    async fn add_content_type(&self, request: &AddContentTypeRequest) -> Result<ContentTypeResponse>;

    /// Get the client type name for logging.
    fn client_type(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_external_ids_are_unique() {
        let a = ExternalId::generate();
        let b = ExternalId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_element_data_omits_unset_fields() {
        let element = ElementData::new("Title", ElementType::Text);
        let value = serde_json::to_value(&element).unwrap();

        assert_eq!(value["type"], "text");
        assert_eq!(value["guidelines"], "");
        assert_eq!(value["external_id"], element.external_id.as_str());
        assert!(value.get("mode").is_none());
        assert!(value.get("options").is_none());
        assert!(value.get("taxonomy_group").is_none());
        assert!(value.get("depends_on").is_none());
    }

    #[test]
    fn test_slug_dependency_wire_format() {
        let title = ElementData::new("Title", ElementType::Text);
        let mut slug = ElementData::new("Slug", ElementType::UrlSlug);
        slug.depends_on = Some(DependsOn {
            element: ElementReference::by_external_id(&title.external_id),
        });

        let value = serde_json::to_value(&slug).unwrap();
        assert_eq!(value["type"], "url_slug");
        assert_eq!(
            value["depends_on"],
            json!({ "element": { "external_id": title.external_id.as_str() } })
        );
    }

    #[test]
    fn test_response_into_target_content_type() {
        let response: ContentTypeResponse = serde_json::from_value(json!({
            "id": "b2c14f2c-6467-460b-a70b-bca17972a33a",
            "codename": "article",
            "name": "Article",
            "last_modified": "2019-01-01T00:00:00Z",
            "elements": [{ "type": "text", "name": "Title" }]
        }))
        .unwrap();

        let target = TargetContentType::from(response);
        assert_eq!(target.system.codename, "article");
        assert_eq!(target.system.id, "b2c14f2c-6467-460b-a70b-bca17972a33a");
        assert_eq!(target.elements.len(), 1);
    }
}
