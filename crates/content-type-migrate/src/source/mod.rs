//! Source content model: the content types being migrated and how to load them.

mod prerequisites;

pub use prerequisites::{PrerequisiteTaxonomies, TaxonomyMapping};

use crate::error::Result;
use crate::target::DependsOn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Element type tag of a source content type element.
///
/// Unknown tags are kept as [`SourceElementType::Other`] so the type mapper
/// can report them instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceElementType {
    Text,
    Number,
    Asset,
    DateTime,
    RichText,
    UrlSlug,
    MultipleChoice,
    ModularContent,
    Taxonomy,
    Other(String),
}

impl SourceElementType {
    /// Wire name of the tag.
    pub fn as_str(&self) -> &str {
        match self {
            SourceElementType::Text => "text",
            SourceElementType::Number => "number",
            SourceElementType::Asset => "asset",
            SourceElementType::DateTime => "date_time",
            SourceElementType::RichText => "rich_text",
            SourceElementType::UrlSlug => "url_slug",
            SourceElementType::MultipleChoice => "multiple_choice",
            SourceElementType::ModularContent => "modular_content",
            SourceElementType::Taxonomy => "taxonomy",
            SourceElementType::Other(tag) => tag,
        }
    }
}

impl From<&str> for SourceElementType {
    fn from(tag: &str) -> Self {
        match tag {
            "text" => SourceElementType::Text,
            "number" => SourceElementType::Number,
            "asset" => SourceElementType::Asset,
            "date_time" => SourceElementType::DateTime,
            "rich_text" => SourceElementType::RichText,
            "url_slug" => SourceElementType::UrlSlug,
            "multiple_choice" => SourceElementType::MultipleChoice,
            "modular_content" => SourceElementType::ModularContent,
            "taxonomy" => SourceElementType::Taxonomy,
            other => SourceElementType::Other(other.to_string()),
        }
    }
}

impl From<String> for SourceElementType {
    fn from(tag: String) -> Self {
        SourceElementType::from(tag.as_str())
    }
}

impl From<SourceElementType> for String {
    fn from(tag: SourceElementType) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for SourceElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// System metadata of a source content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSystem {
    /// Display name.
    pub name: String,

    /// Codename in the source project.
    pub codename: String,

    /// Source project id, when the export carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// One option of a multiple choice element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceOption {
    pub name: String,
}

/// One element (field) of a source content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceElement {
    pub name: String,

    pub codename: String,

    #[serde(rename = "type")]
    pub element_type: SourceElementType,

    /// Options of a multiple choice element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SourceOption>>,

    /// Codename of the taxonomy group a taxonomy element uses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy_group: Option<String>,

    /// Explicit dependency of a URL slug element, in the `{"element": {...}}`
    /// shape the Management API uses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DependsOn>,
}

impl SourceElement {
    /// Create a plain element with no type-specific payload.
    pub fn new(
        name: impl Into<String>,
        codename: impl Into<String>,
        element_type: SourceElementType,
    ) -> Self {
        Self {
            name: name.into(),
            codename: codename.into(),
            element_type,
            options: None,
            taxonomy_group: None,
            depends_on: None,
        }
    }
}

/// A content type as exported from the source project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceContentType {
    pub system: SourceSystem,

    #[serde(default)]
    pub elements: Vec<SourceElement>,
}

impl SourceContentType {
    /// Codename used in logs and provenance records.
    pub fn codename(&self) -> &str {
        &self.system.codename
    }
}

/// Taxonomy group listed in an export (only the identity matters here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceTaxonomy {
    pub codename: String,

    #[serde(default)]
    pub name: String,
}

/// A content model export file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentModelExport {
    #[serde(default)]
    pub content_types: Vec<SourceContentType>,

    #[serde(default)]
    pub taxonomies: Vec<SourceTaxonomy>,
}

impl ContentModelExport {
    /// Load an export from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let export = Self::from_json(&content)?;
        debug!(
            "Loaded {} content types and {} taxonomies from {:?}",
            export.content_types.len(),
            export.taxonomies.len(),
            path.as_ref()
        );
        Ok(export)
    }

    /// Parse an export from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_known_tags() {
        assert_eq!(SourceElementType::from("text"), SourceElementType::Text);
        assert_eq!(SourceElementType::from("url_slug"), SourceElementType::UrlSlug);
        assert_eq!(
            SourceElementType::from("modular_content"),
            SourceElementType::ModularContent
        );
    }

    #[test]
    fn test_unknown_tag_is_preserved() {
        let tag = SourceElementType::from("custom");
        assert_eq!(tag, SourceElementType::Other("custom".to_string()));
        assert_eq!(tag.to_string(), "custom");
    }

    #[test]
    fn test_parse_export() {
        let json = r#"{
            "content_types": [{
                "system": { "name": "Article", "codename": "article" },
                "elements": [
                    { "name": "Title", "codename": "title", "type": "text" },
                    { "name": "Layout", "codename": "layout", "type": "guidelines" },
                    { "name": "Tags", "codename": "tags", "type": "taxonomy", "taxonomy_group": "topics" },
                    { "name": "Color", "codename": "color", "type": "multiple_choice",
                      "options": [{ "name": "Red" }, { "name": "Blue" }] },
                    { "name": "Slug", "codename": "slug", "type": "url_slug",
                      "depends_on": { "element": { "codename": "title" } } }
                ]
            }],
            "taxonomies": [{ "codename": "topics", "name": "Topics" }]
        }"#;

        let export = ContentModelExport::from_json(json).unwrap();
        assert_eq!(export.content_types.len(), 1);
        let article = &export.content_types[0];
        assert_eq!(article.codename(), "article");
        assert_eq!(article.elements[1].element_type, SourceElementType::Other("guidelines".into()));
        assert_eq!(article.elements[2].taxonomy_group.as_deref(), Some("topics"));
        assert_eq!(article.elements[3].options.as_ref().map(Vec::len), Some(2));
        let dependency = article.elements[4].depends_on.as_ref().unwrap();
        assert_eq!(dependency.element.codename.as_deref(), Some("title"));
        assert_eq!(export.taxonomies[0].codename, "topics");
    }

    #[test]
    fn test_misspelled_dependency_is_rejected() {
        let json = r#"{
            "content_types": [{
                "system": { "name": "Article", "codename": "article" },
                "elements": [
                    { "name": "Slug", "codename": "slug", "type": "url_slug",
                      "depends_on": { "element": { "code_name": "title" } } }
                ]
            }]
        }"#;

        let err = ContentModelExport::from_json(json).unwrap_err();
        assert!(matches!(err, crate::error::MigrateError::Json(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ContentModelExport::load("does-not-exist.json").unwrap_err();
        assert!(matches!(err, crate::error::MigrateError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "content_types": [] }}"#).unwrap();

        let export = ContentModelExport::load(file.path()).unwrap();
        assert!(export.content_types.is_empty());
        assert!(export.taxonomies.is_empty());
    }
}
