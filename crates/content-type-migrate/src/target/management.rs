//! HTTP client for the Management API.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::{AddContentTypeRequest, ContentTypeClient, ContentTypeResponse};
use crate::config::TargetConfig;
use crate::error::{MigrateError, Result};

/// Management API client bound to one target project.
#[derive(Clone)]
pub struct ManagementClient {
    client: Client,
    base_url: String,
    project_id: String,
    api_key: String,
}

impl ManagementClient {
    /// Create a client from the target configuration.
    pub fn new(config: &TargetConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn types_url(&self) -> String {
        format!("{}/projects/{}/types", self.base_url, self.project_id)
    }
}

#[async_trait]
impl ContentTypeClient for ManagementClient {
    async fn add_content_type(&self, request: &AddContentTypeRequest) -> Result<ContentTypeResponse> {
        let url = self.types_url();
        debug!("POST {} ({} elements)", url, request.elements.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) => body,
                Err(e) => format!("response body could not be read: {e}"),
            };
            return Err(MigrateError::remote(status.as_u16(), message));
        }

        Ok(response.json::<ContentTypeResponse>().await?)
    }

    fn client_type(&self) -> &'static str {
        "management-api"
    }
}
