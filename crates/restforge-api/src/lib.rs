//! Runtime support for restforge-generated REST clients.
//!
//! Generated builders assemble a [`RestRequestBuilder`] per call: HTTP verb,
//! URL template, path/query bindings, an optional JSON-encoded body and the
//! response decoder. Actual I/O is delegated to a caller-supplied
//! [`Transport`]; this crate performs no network access of its own.

pub mod callback;
pub mod codec;
pub mod error;
pub mod request;
pub mod transport;

// Re-exports
pub use callback::{ResponseDispatcher, RestCallback};
pub use codec::{Decoder, Encoder, JsonCodec};
pub use error::{CodecError, Result, RestError};
pub use request::{Method, RequestSpec, RestRequestBuilder, set_default_application_path};
pub use transport::{Completion, RawResponse, RequestHandle, Transport, TransportOutcome};
