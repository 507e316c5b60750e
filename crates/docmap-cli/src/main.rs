//! Command-line interface for `docmap`, a document-store-to-feature-schema
//! mapping toolkit.
//!
//! This binary provides a user-friendly CLI over the [`docmap_core`] library
//! for inspecting how schemaless document collections map onto typed
//! geospatial feature schemas.
//!
//! # Architecture
//!
//! The CLI is built using [`clap`] for argument parsing and [`tracing`] for
//! structured logging. It acts as a thin façade that parses arguments,
//! configures logging, and delegates to command handlers. Usage reporting is
//! fire-and-forget and only active when a send credential is configured.
//!
//! # Available Commands
//!
//! - `schema` - Infer and display the feature schema of a document collection
//! - `geometry` - Decode document geometries and print them as WKT
//! - `mappers` - List all mapping strategies and their capabilities
//! - `classify` - Classify an ingest path (directory, archive, spatial file)

mod display;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use geozero::ToWkt;
use tracing::{Level, info};
use tracing_log::LogTracer;
use tracing_subscriber::FmtSubscriber;

use docmap_core::error::DocMapError;
use docmap_core::registry::get_strategies;
use docmap_core::{operations, source};
use docmap_core_common::InMemorySampleSource;
use docmap_ingest::IngestUnit;
use docmap_usage::{LogTransport, MessageTransport, UsageConfig, UsageRecord};

#[derive(Parser)]
#[command(
    name = "docmap",
    version,
    about = "Schemaless document collections as typed geospatial feature schemas",
    long_about = "docmap infers typed feature schemas from schemaless document \
                  collections and converts document geometry encodings both ways."
)]
struct Cli {
    /// Enable verbose (INFO level) logging output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug (DEBUG level) logging output with detailed diagnostics.
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the `docmap` CLI.
#[derive(Subcommand)]
enum Commands {
    /// Infers and displays the feature schema of a document collection.
    ///
    /// Reads a document file (JSON array, single document, or
    /// newline-delimited documents), samples it, and prints the inferred
    /// attribute list together with any skipped fields.
    Schema {
        /// Path to the document file.
        #[arg(value_name = "DOCUMENTS")]
        input: String,

        /// Collection name attached to the inferred schema.
        #[arg(short, long, default_value = "collection")]
        collection: String,

        /// Mapping strategy to apply (e.g., "geojson", "flat").
        #[arg(short, long, default_value = "geojson")]
        strategy: String,
    },

    /// Decodes document geometries and prints them as WKT.
    Geometry {
        /// Path to the document file.
        #[arg(value_name = "DOCUMENTS")]
        input: String,

        /// Mapping strategy to apply (e.g., "geojson", "flat").
        #[arg(short, long, default_value = "geojson")]
        strategy: String,

        /// Maximum number of geometries to print.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Lists all mapping strategies and their capabilities.
    Mappers,

    /// Classifies an ingest path as a directory, archive, or spatial file.
    Classify {
        /// Filesystem path to classify.
        #[arg(value_name = "PATH")]
        path: String,
    },
}

/// Entry point for the `docmap` command-line interface.
///
/// # Errors
///
/// Returns an error if command execution fails or if the logging system
/// cannot be initialized.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity flags
    let log_level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    // Bridge logs from the `log` crate to the `tracing` ecosystem.
    LogTracer::init()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true) // Show module paths for better context
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let usage = usage_record(&cli.command);

    // Execute the command
    match cli.command {
        Commands::Schema {
            input,
            collection,
            strategy,
        } => {
            info!("Inferring schema for '{collection}' from {input}");
            handle_schema(&input, &collection, &strategy)?;
        },
        Commands::Geometry {
            input,
            strategy,
            limit,
        } => {
            info!("Decoding geometries from {input}");
            handle_geometry(&input, &strategy, limit)?;
        },
        Commands::Mappers => {
            display::display_strategies(&get_strategies());
        },
        Commands::Classify { path } => {
            handle_classify(&path)?;
        },
    }

    // Best-effort usage reporting; drops quietly without a credential.
    LogTransport::new(UsageConfig::from_env()).send(&[usage]);

    Ok(())
}

fn usage_record(command: &Commands) -> UsageRecord {
    match command {
        Commands::Schema {
            collection,
            strategy,
            ..
        } => UsageRecord::new("schema")
            .with_collection(collection.clone())
            .with_strategy(strategy.clone()),
        Commands::Geometry { strategy, .. } => {
            UsageRecord::new("geometry").with_strategy(strategy.clone())
        },
        Commands::Mappers => UsageRecord::new("mappers"),
        Commands::Classify { .. } => UsageRecord::new("classify"),
    }
}

/// Converts an orchestration error into its user-facing form.
fn friendly(err: DocMapError) -> anyhow::Error {
    match err.recovery_suggestion() {
        Some(hint) => anyhow!("{}\n\n{hint}", err.user_message()),
        None => anyhow!("{}", err.user_message()),
    }
}

fn handle_schema(input: &str, collection: &str, strategy: &str) -> Result<()> {
    let documents = source::load_documents(input).map_err(friendly)?;
    let sample = InMemorySampleSource::new(documents);
    let info = operations::describe_collection(collection, strategy, &sample).map_err(friendly)?;
    display::display_collection_info(&info);
    Ok(())
}

fn handle_geometry(input: &str, strategy: &str, limit: Option<usize>) -> Result<()> {
    let documents = source::load_documents(input).map_err(friendly)?;
    let geometries = operations::read_geometries(strategy, &documents, limit).map_err(friendly)?;

    for (index, geometry) in geometries.iter().enumerate() {
        let wkt = geometry
            .to_wkt()
            .map_err(|err| anyhow!("Failed to format geometry {index} as WKT: {err}"))?;
        println!("{index}: {wkt}");
    }
    Ok(())
}

fn handle_classify(path: &str) -> Result<()> {
    let unit = IngestUnit::classify(path)?;
    println!("{}: {} ('{}')", path, unit.kind(), unit.name());
    Ok(())
}
