//! content-type-migrate CLI - migrate content types into a Management API project.

use clap::{Parser, Subcommand};
use content_type_migrate::element::build_request;
use content_type_migrate::{
    Config, ContentModelExport, ContentTypeClient, DryRunClient, InstantPacer, JsonFileRecorder,
    ManagementClient, MigrateError, NoOpRecorder, Orchestrator, Pacer, PrerequisiteTaxonomies,
    ProvenanceRecorder, TokioPacer,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser)]
#[command(name = "content-type-migrate")]
#[command(about = "Migrate content types into a Management API project")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the exported content types in the target project
    Import {
        /// Path to the content model export (JSON)
        #[arg(short, long)]
        source: PathBuf,

        /// Path to the migrated taxonomy table (JSON); defaults to unchanged codenames
        #[arg(short, long)]
        prerequisites: Option<PathBuf>,

        /// Rehearse the import without calling the target project
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the creation requests without sending them (no config needed)
    Plan {
        /// Path to the content model export (JSON)
        #[arg(short, long)]
        source: PathBuf,

        /// Path to the migrated taxonomy table (JSON); defaults to unchanged codenames
        #[arg(short, long)]
        prerequisites: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<(), MigrateError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format)
        .map_err(|e| MigrateError::Config(e.to_string()))?;

    match cli.command {
        Commands::Plan {
            source,
            prerequisites,
        } => {
            let (export, prerequisites) = load_inputs(&source, prerequisites.as_deref())?;

            let requests = export
                .content_types
                .iter()
                .map(|ct| build_request(ct, &prerequisites))
                .collect::<Result<Vec<_>, _>>()?;

            println!("{}", serde_json::to_string_pretty(&requests)?);
        }

        Commands::Validate => {
            let config = Config::load(&cli.config)?;
            info!("Loaded configuration from {:?}", cli.config);
            println!(
                "Configuration is valid (project {}, {}ms between requests)",
                config.target.project_id, config.import.inter_request_delay_ms
            );
        }

        Commands::Import {
            source,
            prerequisites,
            dry_run,
        } => {
            let config = Config::load(&cli.config)?;
            info!("Loaded configuration from {:?}", cli.config);

            let (export, prerequisites) = load_inputs(&source, prerequisites.as_deref())?;

            let client: Arc<dyn ContentTypeClient> = if dry_run {
                Arc::new(DryRunClient::new())
            } else {
                Arc::new(ManagementClient::new(&config.target)?)
            };
            let pacer: Arc<dyn Pacer> = if dry_run {
                Arc::new(InstantPacer::new())
            } else {
                Arc::new(TokioPacer)
            };

            let file_recorder = config
                .import
                .provenance_file
                .as_ref()
                .map(|path| Arc::new(JsonFileRecorder::new(path)));
            let recorder: Arc<dyn ProvenanceRecorder> = match &file_recorder {
                Some(recorder) => recorder.clone(),
                None => Arc::new(NoOpRecorder::new()),
            };

            let orchestrator = Orchestrator::new(client, config.import.clone())
                .with_pacer(pacer)
                .with_recorder(recorder);

            let result = orchestrator
                .run(&export.content_types, &prerequisites)
                .await;

            // Keep the provenance of whatever was created, even if the batch failed
            if let Some(recorder) = &file_recorder {
                match recorder.flush() {
                    Ok(()) => info!("Provenance written to {:?}", recorder.path()),
                    Err(e) if result.is_err() => warn!("Could not write provenance: {}", e),
                    Err(e) => return Err(e),
                }
            }

            let report = result?;

            if cli.output_json {
                println!("{}", report.to_json()?);
            } else {
                let status_msg = if dry_run { "Dry run completed!" } else { "Import completed!" };
                println!("\n{}", status_msg);
                println!("  Run ID: {}", report.run_id);
                println!("  Duration: {:.2}s", report.duration_seconds);
                println!("  Content types: {}", report.content_types_imported);
                println!("  Elements: {}", report.elements_created);
                if report.elements_skipped > 0 {
                    println!("  Skipped elements: {}", report.elements_skipped);
                }
                for result in &report.results {
                    println!(
                        "  {} -> {} ({})",
                        result.original_item.codename(),
                        result.imported_item.system.codename,
                        result.imported_item.system.id
                    );
                }
            }
        }
    }

    Ok(())
}

fn load_inputs(
    source: &Path,
    prerequisites: Option<&Path>,
) -> Result<(ContentModelExport, PrerequisiteTaxonomies), MigrateError> {
    let export = ContentModelExport::load(source)?;
    let prerequisites = match prerequisites {
        Some(path) => PrerequisiteTaxonomies::load(path)?,
        None => PrerequisiteTaxonomies::identity(&export.taxonomies),
    };
    info!(
        "Loaded {} content types and {} prerequisite taxonomies",
        export.content_types.len(),
        prerequisites.len()
    );
    Ok((export, prerequisites))
}

fn setup_logging(verbosity: &str, format: &str) -> Result<(), String> {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // stdout carries command output (plans, JSON reports)
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    Ok(())
}
