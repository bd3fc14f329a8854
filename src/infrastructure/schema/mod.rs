//! Service schema input - declaration types and their loaders

pub mod composite_loader;
pub mod file_loader;
pub mod http_loader;
pub mod types;

pub use composite_loader::CompositeSchemaLoader;
pub use file_loader::FileSchemaLoader;
pub use http_loader::HttpSchemaLoader;
pub use types::{MethodDecl, ParamDecl, ServiceDecl, ServiceSchema};
