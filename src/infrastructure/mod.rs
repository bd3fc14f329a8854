//! Infrastructure layer - schema loading, template rendering, output

pub mod generation;
pub mod output;
pub mod schema;

pub use generation::TeraBuilderRenderer;
pub use output::FileSystemArtifactWriter;
pub use schema::{CompositeSchemaLoader, FileSchemaLoader, HttpSchemaLoader};
