//! URL slug dependency resolution.

use tracing::debug;

use crate::error::{MigrateError, Result};
use crate::target::{DependsOn, ElementData, ElementReference, ElementType};

/// Make every URL slug element depend on a text element.
///
/// A slug that already carries an explicit dependency keeps it unchanged.
/// Otherwise it depends on the first text element of the list. A reference
/// naming no element counts as absent. A slug left with neither fails the
/// whole content type.
pub fn resolve_slug_dependencies(
    content_type: &str,
    mut elements: Vec<ElementData>,
) -> Result<Vec<ElementData>> {
    let first_text = elements
        .iter()
        .find(|e| e.element_type == ElementType::Text)
        .map(|e| e.external_id.clone());

    for element in elements
        .iter_mut()
        .filter(|e| e.element_type == ElementType::UrlSlug)
    {
        if element
            .depends_on
            .as_ref()
            .is_some_and(|d| !d.element.is_empty())
        {
            continue;
        }

        let text_id = first_text
            .as_ref()
            .ok_or_else(|| MigrateError::unresolved_slug(content_type))?;

        debug!(
            "URL slug '{}' in '{}' depends on text element {}",
            element.name, content_type, text_id
        );
        element.depends_on = Some(DependsOn {
            element: ElementReference::by_external_id(text_id),
        });
    }

    Ok(elements)
}
