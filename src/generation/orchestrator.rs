//! Generation orchestration - coordinates loading, descriptor building,
//! rendering and output.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::generation::descriptor::ServiceDescriptor;
use crate::generation::errors::GenerationError;
use crate::generation::traits::{ArtifactWriter, BuilderRenderer, SchemaLoader};
use crate::generation::{diagnostics, service};

/// Summary of one generation run
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    /// Generated builder module names, one per emitted service
    pub modules: Vec<String>,
    /// Total number of methods excluded with a diagnostic
    pub error_count: usize,
}

/// Orchestrates the code generation workflow
pub struct GenerationOrchestrator {
    schema_loader: Arc<dyn SchemaLoader>,
    renderer: Arc<dyn BuilderRenderer>,
    writer: Arc<dyn ArtifactWriter>,
}

impl GenerationOrchestrator {
    pub fn new(
        schema_loader: Arc<dyn SchemaLoader>,
        renderer: Arc<dyn BuilderRenderer>,
        writer: Arc<dyn ArtifactWriter>,
    ) -> Self {
        Self {
            schema_loader,
            renderer,
            writer,
        }
    }

    /// Execute the generation workflow
    pub async fn generate(
        &self,
        source: &str,
        out_dir: &Path,
    ) -> Result<GenerationResult, GenerationError> {
        let schema = self.schema_loader.load(source).await?;
        debug!(services = schema.services.len(), "loaded schema");

        if schema.services.is_empty() {
            return Err(GenerationError::ValidationError(
                "schema declares no services".into(),
            ));
        }

        let mut descriptors: Vec<ServiceDescriptor> = Vec::with_capacity(schema.services.len());
        for decl in &schema.services {
            let descriptor = service::build_service(decl)?;
            diagnostics::report(&descriptor.name, &descriptor.errors);
            descriptors.push(descriptor);
        }

        let mut artifacts = Vec::with_capacity(descriptors.len() + 1);
        for descriptor in &descriptors {
            artifacts.push(self.renderer.render_service(descriptor)?);
        }
        artifacts.push(
            self.renderer
                .render_module(&schema.application_path, &descriptors)?,
        );

        self.writer.write(out_dir, &artifacts).await?;

        let modules: Vec<String> = descriptors.iter().map(|d| d.module_name.clone()).collect();
        let error_count = descriptors.iter().map(|d| d.errors.len()).sum();
        info!(
            modules = modules.len(),
            excluded = error_count,
            out_dir = %out_dir.display(),
            "generation complete"
        );

        Ok(GenerationResult {
            out_dir: out_dir.to_path_buf(),
            modules,
            error_count,
        })
    }
}
