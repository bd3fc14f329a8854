//! Composite schema loader that picks a strategy per source

use async_trait::async_trait;

use super::types::ServiceSchema;
use crate::generation::errors::GenerationError;
use crate::generation::traits::SchemaLoader;

/// Routes URLs to the HTTP loader and everything else to the file loader
pub struct CompositeSchemaLoader {
    http: super::HttpSchemaLoader,
    file: super::FileSchemaLoader,
}

impl CompositeSchemaLoader {
    pub fn new() -> Self {
        Self {
            http: super::HttpSchemaLoader::new(),
            file: super::FileSchemaLoader::new(),
        }
    }
}

impl Default for CompositeSchemaLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchemaLoader for CompositeSchemaLoader {
    async fn load(&self, source: &str) -> Result<ServiceSchema, GenerationError> {
        if source.starts_with("http://") || source.starts_with("https://") {
            tracing::debug!("CompositeSchemaLoader: using HTTP loader for {source}");
            self.http.load(source).await
        } else {
            tracing::debug!("CompositeSchemaLoader: using file loader for {source}");
            self.file.load(source).await
        }
    }
}
