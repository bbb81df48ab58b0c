//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;

use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Environment variable that supplies or overrides the Management API key.
pub const API_KEY_ENV: &str = "CTM_MANAGEMENT_API_KEY";

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.with_env_overrides().validated()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_api_key_from(std::env::var(API_KEY_ENV).ok())
    }

    fn with_api_key_from(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            debug!("Using Management API key from {}", API_KEY_ENV);
            self.target.api_key = key;
        }
        self
    }
}
