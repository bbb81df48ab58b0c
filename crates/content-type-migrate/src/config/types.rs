//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default Management API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://manage.kontent.ai/v2";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target project configuration.
    pub target: TargetConfig,

    /// Import behavior configuration.
    #[serde(default)]
    pub import: ImportConfig,
}

/// Target project (Management API) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Target project id.
    pub project_id: String,

    /// Management API key. May be supplied through the environment instead.
    #[serde(default)]
    pub api_key: String,

    /// API base URL (default: the public Management API v2 endpoint).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Import behavior configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Pause after each creation request, in milliseconds (default: 250).
    /// Keeps consecutive requests under the API's rate limit.
    #[serde(default = "default_inter_request_delay_ms")]
    pub inter_request_delay_ms: u64,

    /// Where to write the provenance log. Not written when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance_file: Option<PathBuf>,
}

impl ImportConfig {
    /// Configured pause as a [`Duration`].
    pub fn inter_request_delay(&self) -> Duration {
        Duration::from_millis(self.inter_request_delay_ms)
    }

    /// Builder-style override of the pause.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.inter_request_delay_ms = delay_ms;
        self
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            inter_request_delay_ms: default_inter_request_delay_ms(),
            provenance_file: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_inter_request_delay_ms() -> u64 {
    250
}
