//! Error types for the restforge runtime API

use thiserror::Error;

/// Result type alias for runtime request operations
pub type Result<T> = std::result::Result<T, RestError>;

/// Errors surfaced while building or dispatching a request
#[derive(Error, Debug)]
pub enum RestError {
    /// A required builder field was never set
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Server answered with a non-success status and no error callback was registered
    #[error("Request failed with status {status}")]
    Status { status: u16 },

    /// Transport-level fault with no failure callback registered
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Body serialization failed before dispatch
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Errors raised by payload decoders and encoders
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to decode payload: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode payload: {0}")]
    Encode(#[source] serde_json::Error),
}
