//! Filesystem-based artifact writer

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::generation::descriptor::Artifact;
use crate::generation::errors::GenerationError;
use crate::generation::traits::ArtifactWriter;

/// Writes generated artifacts under an output directory
pub struct FileSystemArtifactWriter;

impl FileSystemArtifactWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemArtifactWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactWriter for FileSystemArtifactWriter {
    async fn write(&self, out_dir: &Path, artifacts: &[Artifact]) -> Result<(), GenerationError> {
        for artifact in artifacts {
            let target = out_dir.join(&artifact.path);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    GenerationError::OutputError(format!(
                        "Failed to create directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }

            let mut file = fs::File::create(&target).await.map_err(|e| {
                GenerationError::OutputError(format!(
                    "Failed to create file {}: {e}",
                    target.display()
                ))
            })?;

            file.write_all(artifact.content.as_bytes())
                .await
                .map_err(|e| {
                    GenerationError::OutputError(format!(
                        "Failed to write file {}: {e}",
                        target.display()
                    ))
                })?;

            file.flush().await.map_err(|e| {
                GenerationError::OutputError(format!(
                    "Failed to flush file {}: {e}",
                    target.display()
                ))
            })?;
        }

        Ok(())
    }
}
