//! Tera-backed implementation of the builder renderer.

use std::path::PathBuf;
use tera::Tera;

use super::context;
use crate::generation::descriptor::{Artifact, ServiceDescriptor};
use crate::generation::errors::GenerationError;
use crate::generation::traits::BuilderRenderer;

const BUILDER_TEMPLATE: &str = include_str!("../../../templates/builder.rs.tera");
const MODULE_TEMPLATE: &str = include_str!("../../../templates/mod.rs.tera");

/// Renders service descriptors through the embedded templates
pub struct TeraBuilderRenderer {
    tera: Tera,
}

impl TeraBuilderRenderer {
    pub fn new() -> Result<Self, GenerationError> {
        let mut tera = Tera::default();
        tera.add_raw_template("builder.rs", BUILDER_TEMPLATE)
            .map_err(|e| GenerationError::RenderError(format!("Failed to add template: {e}")))?;
        tera.add_raw_template("mod.rs", MODULE_TEMPLATE)
            .map_err(|e| GenerationError::RenderError(format!("Failed to add template: {e}")))?;
        Ok(Self { tera })
    }
}

impl BuilderRenderer for TeraBuilderRenderer {
    fn render_service(&self, service: &ServiceDescriptor) -> Result<Artifact, GenerationError> {
        let render_context = context::service_context(service)?;
        let content = self
            .tera
            .render("builder.rs", &render_context)
            .map_err(|e| {
                GenerationError::RenderError(format!(
                    "Failed to render builder for {}: {e}",
                    service.name
                ))
            })?;

        Ok(Artifact {
            path: PathBuf::from(format!("{}.rs", service.module_name)),
            content,
        })
    }

    fn render_module(
        &self,
        application_path: &str,
        services: &[ServiceDescriptor],
    ) -> Result<Artifact, GenerationError> {
        let render_context = context::module_context(application_path, services);
        let content = self
            .tera
            .render("mod.rs", &render_context)
            .map_err(|e| GenerationError::RenderError(format!("Failed to render mod.rs: {e}")))?;

        Ok(Artifact {
            path: PathBuf::from("mod.rs"),
            content,
        })
    }
}
