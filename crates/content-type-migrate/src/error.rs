//! Error types for the content type migration library.

use thiserror::Error;

/// Exit code for configuration problems.
pub const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for content types that cannot be translated.
pub const EXIT_TRANSLATION_ERROR: u8 = 2;
/// Exit code for failures reported by the target system.
pub const EXIT_REMOTE_ERROR: u8 = 3;
/// Exit code for file system errors.
pub const EXIT_IO_ERROR: u8 = 7;

/// Main error type for migration operations.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Configuration error (invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A taxonomy element has no taxonomy group assigned
    #[error("Element '{element}' does not have taxonomy group assigned")]
    MissingTaxonomyGroup { element: String },

    /// The referenced taxonomy group was not migrated beforehand
    #[error("Cannot find imported taxonomy group for element '{element}' with taxonomy group set to '{taxonomy_group}'")]
    UnresolvedTaxonomyReference {
        element: String,
        taxonomy_group: String,
    },

    /// A URL slug element has nothing to depend on
    #[error("Could not get any depending element for url slug field in content type '{content_type}'")]
    UnresolvedSlugDependency { content_type: String },

    /// The target system rejected a creation request
    #[error("Remote creation failed (HTTP {status}): {message}")]
    RemoteCreation { status: u16, message: String },

    /// HTTP transport error talking to the target system
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MigrateError {
    /// Create a MissingTaxonomyGroup error
    pub fn missing_taxonomy_group(element: impl Into<String>) -> Self {
        MigrateError::MissingTaxonomyGroup {
            element: element.into(),
        }
    }

    /// Create an UnresolvedTaxonomyReference error
    pub fn unresolved_taxonomy(element: impl Into<String>, taxonomy_group: impl Into<String>) -> Self {
        MigrateError::UnresolvedTaxonomyReference {
            element: element.into(),
            taxonomy_group: taxonomy_group.into(),
        }
    }

    /// Create an UnresolvedSlugDependency error
    pub fn unresolved_slug(content_type: impl Into<String>) -> Self {
        MigrateError::UnresolvedSlugDependency {
            content_type: content_type.into(),
        }
    }

    /// Create a RemoteCreation error
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        MigrateError::RemoteCreation {
            status,
            message: message.into(),
        }
    }

    /// Process exit code for this error class.
    pub fn exit_code(&self) -> u8 {
        match self {
            MigrateError::Config(_) | MigrateError::Yaml(_) => EXIT_CONFIG_ERROR,
            MigrateError::MissingTaxonomyGroup { .. }
            | MigrateError::UnresolvedTaxonomyReference { .. }
            | MigrateError::UnresolvedSlugDependency { .. } => EXIT_TRANSLATION_ERROR,
            MigrateError::RemoteCreation { .. } | MigrateError::Http(_) => EXIT_REMOTE_ERROR,
            // Malformed export files are input problems, same class as config
            MigrateError::Json(_) => EXIT_CONFIG_ERROR,
            MigrateError::Io(_) => EXIT_IO_ERROR,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for migration operations.
pub type Result<T> = std::result::Result<T, MigrateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(MigrateError::Config("x".into()).exit_code(), EXIT_CONFIG_ERROR);
        assert_eq!(
            MigrateError::unresolved_slug("article").exit_code(),
            EXIT_TRANSLATION_ERROR
        );
        assert_eq!(
            MigrateError::missing_taxonomy_group("tags").exit_code(),
            EXIT_TRANSLATION_ERROR
        );
        assert_eq!(MigrateError::remote(400, "bad").exit_code(), EXIT_REMOTE_ERROR);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(MigrateError::from(io).exit_code(), EXIT_IO_ERROR);
    }

    #[test]
    fn test_messages_name_the_element() {
        let err = MigrateError::unresolved_taxonomy("category", "topics");
        let msg = err.to_string();
        assert!(msg.contains("'category'"));
        assert!(msg.contains("'topics'"));
    }

    #[test]
    fn test_format_detailed_includes_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "export.json");
        let err = MigrateError::from(io);
        let detailed = err.format_detailed();
        assert!(detailed.starts_with("Error: IO error: export.json"));
    }
}
