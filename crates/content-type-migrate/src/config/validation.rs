//! Configuration validation.

use super::Config;
use crate::error::{MigrateError, Result};

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    if config.target.project_id.trim().is_empty() {
        return Err(MigrateError::Config("target.project_id is required".into()));
    }
    if config.target.api_key.trim().is_empty() {
        return Err(MigrateError::Config(format!(
            "target.api_key is required (or set {})",
            super::API_KEY_ENV
        )));
    }
    if !(config.target.endpoint.starts_with("http://")
        || config.target.endpoint.starts_with("https://"))
    {
        return Err(MigrateError::Config(format!(
            "target.endpoint must be an http(s) URL, got '{}'",
            config.target.endpoint
        )));
    }
    if config.target.timeout_seconds == 0 {
        return Err(MigrateError::Config(
            "target.timeout_seconds must be at least 1".into(),
        ));
    }

    Ok(())
}
