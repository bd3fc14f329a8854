//! Completion callbacks and the response dispatch path.

use crate::codec::Decoder;
use crate::error::RestError;
use crate::transport::{RawResponse, TransportOutcome};

/// Caller-supplied completion callback.
///
/// Exactly one of the three methods fires per request, never more than one;
/// each consumes the callback, which makes double delivery unrepresentable.
pub trait RestCallback<R>: Send {
    /// 2xx or 304 response. `result` is `None` when the method declares no
    /// response payload.
    fn on_success(self: Box<Self>, response: RawResponse, result: Option<R>);

    /// Server answered with a non-success status.
    fn on_error(self: Box<Self>, response: RawResponse);

    /// The request never reached a response, or the payload failed to decode.
    fn on_failure(self: Box<Self>, error: RestError);
}

/// Routes a transport outcome to the registered callback, decoding the
/// payload on success. Built by `RestRequestBuilder::send`.
pub struct ResponseDispatcher<R: 'static> {
    decoder: Option<&'static dyn Decoder<R>>,
    callback: Option<Box<dyn RestCallback<R>>>,
}

impl<R> ResponseDispatcher<R> {
    pub(crate) fn new(
        decoder: Option<&'static dyn Decoder<R>>,
        callback: Option<Box<dyn RestCallback<R>>>,
    ) -> Self {
        Self { decoder, callback }
    }

    fn is_success_status(status: u16) -> bool {
        (200..300).contains(&status) || status == 304
    }

    /// Consumes the dispatcher and delivers the outcome. With no callback
    /// registered, an error outcome is returned instead of being swallowed.
    pub fn dispatch(self, outcome: TransportOutcome) -> Result<(), RestError> {
        match outcome {
            TransportOutcome::Response(response) => {
                if Self::is_success_status(response.status) {
                    let Some(callback) = self.callback else {
                        return Ok(());
                    };
                    match self.decoder {
                        Some(decoder) => match decoder.read(&response.body) {
                            Ok(result) => callback.on_success(response, Some(result)),
                            Err(e) => {
                                tracing::debug!(status = response.status, "payload decode failed");
                                callback.on_failure(RestError::Codec(e));
                            }
                        },
                        None => callback.on_success(response, None),
                    }
                    Ok(())
                } else {
                    match self.callback {
                        Some(callback) => {
                            callback.on_error(response);
                            Ok(())
                        }
                        None => Err(RestError::Status {
                            status: response.status,
                        }),
                    }
                }
            }
            TransportOutcome::Failure(message) => match self.callback {
                Some(callback) => {
                    callback.on_failure(RestError::Transport(message));
                    Ok(())
                }
                None => Err(RestError::Transport(message)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::JsonCodec;
    use once_cell::sync::OnceCell;
    use serde::Deserialize;
    use std::sync::mpsc;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Payload {
        greeting: String,
    }

    fn decoder() -> &'static JsonCodec<Payload> {
        static INSTANCE: OnceCell<JsonCodec<Payload>> = OnceCell::new();
        INSTANCE.get_or_init(JsonCodec::new)
    }

    enum Fired {
        Success(u16, Option<Payload>),
        Error(u16),
        Failure(String),
    }

    struct RecordingCallback {
        tx: mpsc::Sender<Fired>,
    }

    impl RestCallback<Payload> for RecordingCallback {
        fn on_success(self: Box<Self>, response: RawResponse, result: Option<Payload>) {
            self.tx.send(Fired::Success(response.status, result)).unwrap();
        }

        fn on_error(self: Box<Self>, response: RawResponse) {
            self.tx.send(Fired::Error(response.status)).unwrap();
        }

        fn on_failure(self: Box<Self>, error: RestError) {
            self.tx.send(Fired::Failure(error.to_string())).unwrap();
        }
    }

    fn recording() -> (Box<RecordingCallback>, mpsc::Receiver<Fired>) {
        let (tx, rx) = mpsc::channel();
        (Box::new(RecordingCallback { tx }), rx)
    }

    #[test]
    fn success_decodes_payload() {
        let (callback, rx) = recording();
        let dispatcher = ResponseDispatcher::new(Some(decoder()), Some(callback));
        dispatcher
            .dispatch(TransportOutcome::Response(RawResponse {
                status: 200,
                body: r#"{"greeting":"Hello, Rest User!"}"#.to_string(),
            }))
            .unwrap();

        match rx.try_recv().unwrap() {
            Fired::Success(200, Some(p)) => assert_eq!(p.greeting, "Hello, Rest User!"),
            _ => panic!("expected success delivery"),
        }
        // exactly one delivery
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn not_modified_counts_as_success() {
        let (callback, rx) = recording();
        let dispatcher = ResponseDispatcher::new(None, Some(callback));
        dispatcher
            .dispatch(TransportOutcome::Response(RawResponse {
                status: 304,
                body: String::new(),
            }))
            .unwrap();
        assert!(matches!(rx.try_recv().unwrap(), Fired::Success(304, None)));
    }

    #[test]
    fn malformed_success_body_fires_failure() {
        let (callback, rx) = recording();
        let dispatcher = ResponseDispatcher::new(Some(decoder()), Some(callback));
        dispatcher
            .dispatch(TransportOutcome::Response(RawResponse {
                status: 200,
                body: "<html>".to_string(),
            }))
            .unwrap();
        assert!(matches!(rx.try_recv().unwrap(), Fired::Failure(_)));
    }

    #[test]
    fn error_status_fires_error_callback() {
        let (callback, rx) = recording();
        let dispatcher = ResponseDispatcher::new(Some(decoder()), Some(callback));
        dispatcher
            .dispatch(TransportOutcome::Response(RawResponse {
                status: 500,
                body: String::new(),
            }))
            .unwrap();
        assert!(matches!(rx.try_recv().unwrap(), Fired::Error(500)));
    }

    #[test]
    fn missing_callback_surfaces_error_status() {
        let dispatcher: ResponseDispatcher<Payload> = ResponseDispatcher::new(Some(decoder()), None);
        let err = dispatcher
            .dispatch(TransportOutcome::Response(RawResponse {
                status: 404,
                body: String::new(),
            }))
            .unwrap_err();
        assert!(matches!(err, RestError::Status { status: 404 }));
    }

    #[test]
    fn missing_callback_surfaces_transport_fault() {
        let dispatcher: ResponseDispatcher<Payload> = ResponseDispatcher::new(None, None);
        let err = dispatcher
            .dispatch(TransportOutcome::Failure("connection refused".to_string()))
            .unwrap_err();
        assert!(matches!(err, RestError::Transport(_)));
    }
}
