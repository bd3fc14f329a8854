//! File-based schema loader

use async_trait::async_trait;
use tokio::fs;

use super::types::ServiceSchema;
use crate::generation::errors::GenerationError;
use crate::generation::traits::SchemaLoader;

/// Loads service schemas from local files
pub struct FileSchemaLoader;

impl FileSchemaLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SchemaLoader for FileSchemaLoader {
    async fn load(&self, source: &str) -> Result<ServiceSchema, GenerationError> {
        let content = fs::read_to_string(source)
            .await
            .map_err(GenerationError::IoError)?;

        parse_schema(&content, source)
    }
}

impl Default for FileSchemaLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses schema text as JSON or YAML, going by the source extension and
/// falling back to trying both.
pub(super) fn parse_schema(content: &str, source: &str) -> Result<ServiceSchema, GenerationError> {
    if source.ends_with(".json") {
        serde_json::from_str(content).map_err(GenerationError::SerializationError)
    } else if source.ends_with(".yaml") || source.ends_with(".yml") {
        serde_yaml::from_str(content)
            .map_err(|e| GenerationError::LoadError(format!("Failed to parse YAML: {e}")))
    } else {
        serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .map_err(|e| GenerationError::LoadError(format!("Failed to parse schema: {e}")))
    }
}
