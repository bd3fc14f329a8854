//! Generation domain module - builds service descriptors and drives emission
//!
//! This module turns loaded service declarations into the descriptor model
//! (services, methods, parameter bindings, codec bindings) and orchestrates
//! rendering those descriptors into generated client-builder sources.

pub mod codecs;
pub mod descriptor;
pub mod diagnostics;
pub mod errors;
pub mod media;
pub mod method;
pub mod orchestrator;
pub mod params;
pub mod service;
pub mod traits;
pub mod urls;
pub mod utils;

pub use descriptor::*;
pub use errors::*;
pub use method::MethodOutcome;
pub use orchestrator::*;
pub use traits::*;

// The declaration input model lives with its loaders in infrastructure
pub use crate::infrastructure::schema::{MethodDecl, ParamDecl, ServiceDecl, ServiceSchema};
