//! Port interfaces for the generation domain

use crate::generation::descriptor::{Artifact, ServiceDescriptor};
use crate::generation::errors::GenerationError;
use crate::infrastructure::schema::ServiceSchema;
use async_trait::async_trait;
use std::path::Path;

/// Loads service schemas from a source (file path or URL)
#[async_trait]
pub trait SchemaLoader: Send + Sync {
    async fn load(&self, source: &str) -> Result<ServiceSchema, GenerationError>;
}

/// Renders service descriptors into generated source artifacts
pub trait BuilderRenderer: Send + Sync {
    /// Render one service into its builder source file
    fn render_service(&self, service: &ServiceDescriptor) -> Result<Artifact, GenerationError>;

    /// Render the `mod.rs` declaring every generated builder module and,
    /// when the schema sets one, installing the default application path
    fn render_module(
        &self,
        application_path: &str,
        services: &[ServiceDescriptor],
    ) -> Result<Artifact, GenerationError>;
}

/// Writes rendered artifacts to their destination
#[async_trait]
pub trait ArtifactWriter: Send + Sync {
    async fn write(&self, out_dir: &Path, artifacts: &[Artifact]) -> Result<(), GenerationError>;
}
