//! Template-based rendering of service descriptors

pub mod context;
pub mod renderer;

pub use renderer::TeraBuilderRenderer;
