//! Client that answers creation requests locally.

use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use super::{AddContentTypeRequest, ContentTypeClient, ContentTypeResponse};
use crate::error::Result;

/// Answers every request with a synthetic response and never touches a remote system.
///
/// Ids are fresh UUIDs and codenames are derived from the content type name,
/// so a batch can be rehearsed end to end.
#[derive(Debug, Default, Clone)]
pub struct DryRunClient;

impl DryRunClient {
    pub fn new() -> Self {
        Self
    }
}

/// Lower-case the name and join alphanumeric runs with underscores.
pub(crate) fn codename_from_name(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[async_trait]
impl ContentTypeClient for DryRunClient {
    async fn add_content_type(&self, request: &AddContentTypeRequest) -> Result<ContentTypeResponse> {
        let elements = request
            .elements
            .iter()
            .map(|element| -> Result<serde_json::Value> {
                let mut value = serde_json::to_value(element)?;
                value["id"] = json!(Uuid::new_v4().to_string());
                value["codename"] = json!(codename_from_name(&element.name));
                Ok(value)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ContentTypeResponse {
            id: Uuid::new_v4().to_string(),
            codename: codename_from_name(&request.name),
            name: request.name.clone(),
            elements,
        })
    }

    fn client_type(&self) -> &'static str {
        "dry-run"
    }
}
