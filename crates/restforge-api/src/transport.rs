//! Transport seam between built requests and whatever performs the I/O.
//!
//! restforge-api never opens a connection itself. Callers hand a
//! [`Transport`] implementation to `RestRequestBuilder::send`, which passes
//! it the fully assembled [`crate::RequestSpec`] together with a completion
//! closure. The transport must invoke the completion exactly once.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::RestError;
use crate::request::RequestSpec;

/// Raw response as seen by the transport, before decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Terminal outcome of one in-flight request.
#[derive(Debug)]
pub enum TransportOutcome {
    /// The server answered, with any status code.
    Response(RawResponse),
    /// The request never completed (connection refused, timeout, ...).
    Failure(String),
}

/// Completion closure handed to the transport. Returns `Err` when the
/// outcome was an error and no callback was registered to receive it; the
/// transport must surface that error rather than drop it.
pub type Completion = Box<dyn FnOnce(TransportOutcome) -> Result<(), RestError> + Send>;

/// Executes an assembled request. Implementations deliver the outcome to
/// `completion` exactly once, at any later point.
pub trait Transport: Send + Sync {
    fn execute(&self, spec: RequestSpec, completion: Completion) -> RequestHandle;
}

/// Cancellable handle for an in-flight request.
#[derive(Debug, Clone, Default)]
pub struct RequestHandle {
    cancelled: Arc<AtomicBool>,
}

impl RequestHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Transports observe this flag best-effort; a
    /// request already completed is unaffected.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
