//! restforge CLI entrypoint
//! Parses command-line arguments and dispatches to the generator.
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use restforge::generation::GenerationOrchestrator;
use restforge::infrastructure::{
    CompositeSchemaLoader, FileSystemArtifactWriter, TeraBuilderRenderer,
};

#[derive(Parser)]
#[command(name = "restforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate REST client builders from a service schema
    Generate {
        /// Path or URL to the service schema (YAML or JSON)
        #[arg(long)]
        schema: String,
        /// Output directory for generated sources
        #[arg(long, default_value = "generated")]
        output_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate { schema, output_dir } => generate(schema, output_dir).await?,
    }
    Ok(())
}

async fn generate(schema: &str, output_dir: &PathBuf) -> anyhow::Result<()> {
    info!("Generating client builders from {schema}");

    let renderer = TeraBuilderRenderer::new().context("Failed to initialize templates")?;
    let orchestrator = GenerationOrchestrator::new(
        Arc::new(CompositeSchemaLoader::new()),
        Arc::new(renderer),
        Arc::new(FileSystemArtifactWriter::new()),
    );

    let result = orchestrator
        .generate(schema, output_dir)
        .await
        .context("Generation failed")?;

    info!(
        "Generated {} builder module(s) in {}",
        result.modules.len(),
        result.out_dir.display()
    );
    if result.error_count > 0 {
        info!(
            "{} method(s) were excluded with diagnostics; see the log above",
            result.error_count
        );
    }
    Ok(())
}
