//! Construction of target element descriptors from source elements.
//!
//! [`build_element`] converts a single element; [`build_request`] converts a
//! whole content type, skipping unsupported elements and resolving URL slug
//! dependencies before anything is sent to the target system.

mod dependency;

pub use dependency::resolve_slug_dependencies;

use tracing::debug;

use crate::error::{MigrateError, Result};
use crate::source::{PrerequisiteTaxonomies, SourceContentType, SourceElement};
use crate::target::{
    AddContentTypeRequest, CodenameReference, ElementData, ElementMode, ElementType, OptionData,
};
use crate::typemap::map_source_element;

/// Build the descriptor for one source element.
///
/// Returns `Ok(None)` when the element type is not supported by the target.
pub fn build_element(
    element: &SourceElement,
    prerequisites: &PrerequisiteTaxonomies,
) -> Result<Option<ElementData>> {
    let Some(element_type) = map_source_element(element) else {
        return Ok(None);
    };

    let mut data = ElementData::new(&element.name, element_type);

    match element_type {
        ElementType::MultipleChoice => {
            data.mode = Some(ElementMode::Single);
            data.options = Some(
                element
                    .options
                    .iter()
                    .flatten()
                    .map(|o| OptionData {
                        name: o.name.clone(),
                    })
                    .collect(),
            );
        }
        ElementType::ModularContent => {
            data.mode = Some(ElementMode::Multiple);
        }
        ElementType::Taxonomy => {
            let group = element
                .taxonomy_group
                .as_deref()
                .ok_or_else(|| MigrateError::missing_taxonomy_group(&element.codename))?;

            let mapping = prerequisites
                .find_by_original(group)
                .ok_or_else(|| MigrateError::unresolved_taxonomy(&element.codename, group))?;

            data.taxonomy_group = Some(CodenameReference {
                codename: mapping.imported_codename.clone(),
            });
        }
        ElementType::UrlSlug => {
            // Explicit references are kept as given; see resolve_slug_dependencies.
            data.depends_on = element.depends_on.clone();
        }
        ElementType::Text
        | ElementType::Number
        | ElementType::Asset
        | ElementType::DateTime
        | ElementType::RichText => {}
    }

    debug!(
        "Built element '{}' ({:?}) with external id {}",
        element.codename, element_type, data.external_id
    );

    Ok(Some(data))
}

/// Build the creation request for a whole content type.
pub fn build_request(
    content_type: &SourceContentType,
    prerequisites: &PrerequisiteTaxonomies,
) -> Result<AddContentTypeRequest> {
    let mut elements = Vec::with_capacity(content_type.elements.len());
    for source_element in &content_type.elements {
        if let Some(data) = build_element(source_element, prerequisites)? {
            elements.push(data);
        }
    }

    let elements = resolve_slug_dependencies(content_type.codename(), elements)?;

    Ok(AddContentTypeRequest {
        name: content_type.system.name.clone(),
        elements,
    })
}
