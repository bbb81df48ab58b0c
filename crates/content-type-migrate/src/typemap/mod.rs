//! Type mapping between source element types and target element types.

use crate::source::{SourceElement, SourceElementType};
use crate::target::ElementType;
use tracing::warn;

/// Map a source element type tag to the target schema.
///
/// Returns `None` for tags the target vocabulary has no counterpart for.
pub fn map_element_type(source_type: &SourceElementType) -> Option<ElementType> {
    match source_type {
        SourceElementType::Text => Some(ElementType::Text),
        SourceElementType::Number => Some(ElementType::Number),
        SourceElementType::Asset => Some(ElementType::Asset),
        SourceElementType::DateTime => Some(ElementType::DateTime),
        SourceElementType::RichText => Some(ElementType::RichText),
        SourceElementType::UrlSlug => Some(ElementType::UrlSlug),
        SourceElementType::MultipleChoice => Some(ElementType::MultipleChoice),
        SourceElementType::ModularContent => Some(ElementType::ModularContent),
        SourceElementType::Taxonomy => Some(ElementType::Taxonomy),
        SourceElementType::Other(_) => None,
    }
}

/// Map the type of `element`, warning when the element is going to be skipped.
pub fn map_source_element(element: &SourceElement) -> Option<ElementType> {
    let mapped = map_element_type(&element.element_type);
    if mapped.is_none() {
        warn!(
            "Mapping of element type '{}' is not yet supported. Skipping element '{}'.",
            element.element_type, element.codename
        );
    }
    mapped
}
