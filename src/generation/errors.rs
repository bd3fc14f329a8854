//! Error types for the generation domain

use thiserror::Error;

/// Errors that abort generation for a whole schema or service
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Schema loading error: {0}")]
    LoadError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Per-method failures collected on the service descriptor. A failing
/// method is excluded from emission; the rest of the service still
/// generates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MethodErrorKind {
    #[error("cannot have more than one body parameter")]
    MoreThanOneBodyParam,

    #[error("return type is the generic response wrapper; declare a response_type override")]
    MissingResponseTypeOverride,

    #[error("unbalanced braces in URL template")]
    MalformedUrlTemplate,

    #[error("unexpected error: {0}")]
    Unexpected(String),
}
