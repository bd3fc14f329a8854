//! Artifact output services

pub mod filesystem;

pub use filesystem::FileSystemArtifactWriter;
