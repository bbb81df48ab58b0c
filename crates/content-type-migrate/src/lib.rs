//! # content-type-migrate
//!
//! Content type migration library for headless CMS Management APIs.
//!
//! This library translates exported content type definitions into creation
//! requests for a target project and sends them with:
//!
//! - **Type mapping** from source element types to the target vocabulary
//! - **URL slug resolution** against locally generated external ids
//! - **Taxonomy references** resolved through previously migrated groups
//! - **Paced, sequential creation** to stay under the API rate limit
//! - **Provenance records** of every created content type
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use content_type_migrate::{Config, ContentModelExport, ManagementClient, Orchestrator};
//! use content_type_migrate::PrerequisiteTaxonomies;
//!
//! #[tokio::main]
//! async fn main() -> content_type_migrate::Result<()> {
//!     let config = Config::load("config.yaml")?;
//!     let export = ContentModelExport::load("export.json")?;
//!     let prerequisites = PrerequisiteTaxonomies::load("taxonomies.json")?;
//!
//!     let client = Arc::new(ManagementClient::new(&config.target)?);
//!     let orchestrator = Orchestrator::new(client, config.import);
//!     let report = orchestrator.run(&export.content_types, &prerequisites).await?;
//!     println!("Imported {} content types", report.content_types_imported);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod element;
pub mod error;
pub mod orchestrator;
pub mod pacing;
pub mod provenance;
pub mod source;
pub mod target;
pub mod translator;
pub mod typemap;

// Re-exports for convenient access
pub use config::{Config, ImportConfig, TargetConfig};
pub use error::{MigrateError, Result};
pub use orchestrator::{import_content_types, ImportReport, ImportResult, Orchestrator};
pub use pacing::{InstantPacer, Pacer, TokioPacer};
pub use provenance::{JsonFileRecorder, MemoryRecorder, NoOpRecorder, ProvenanceRecorder};
pub use source::{ContentModelExport, PrerequisiteTaxonomies, SourceContentType, TaxonomyMapping};
pub use target::{ContentTypeClient, DryRunClient, ManagementClient, TargetContentType};
pub use translator::ContentTypeTranslator;
