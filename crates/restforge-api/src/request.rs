//! The request-builder chain populated by generated client code.

use once_cell::sync::Lazy;
use std::fmt;
use std::sync::RwLock;

use crate::callback::{ResponseDispatcher, RestCallback};
use crate::codec::{Decoder, Encoder};
use crate::error::RestError;
use crate::transport::{RequestHandle, Transport};

/// HTTP verbs eligible for generated client methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Head,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static DEFAULT_APPLICATION_PATH: Lazy<RwLock<String>> = Lazy::new(|| RwLock::new(String::new()));

/// Sets the process-wide path prefix joined ahead of every request URL.
/// Individual builders can override it with
/// [`RestRequestBuilder::application_path`].
pub fn set_default_application_path(path: impl Into<String>) {
    let mut guard = DEFAULT_APPLICATION_PATH
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = path.into();
}

fn default_application_path() -> String {
    DEFAULT_APPLICATION_PATH
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

fn encode_query_component(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// Joins two path segments with exactly one separating `/`.
fn join_paths(base: &str, suffix: &str) -> String {
    match (base.ends_with('/'), suffix.starts_with('/')) {
        (true, true) => format!("{}{}", base, &suffix[1..]),
        (false, false) => format!("{base}/{suffix}"),
        _ => format!("{base}{suffix}"),
    }
}

/// Fully assembled request handed to the transport. Path and query
/// parameters are already substituted and encoded; the body is already
/// serialized to text.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub include_credentials: Option<bool>,
    pub timeout_millis: Option<u32>,
}

/// Chainable request builder, generic over body type `B` and response
/// payload type `R`. Generated builders return one per client method with
/// verb, URL and bindings pre-populated.
pub struct RestRequestBuilder<B: 'static, R: 'static> {
    method: Option<Method>,
    application_path: Option<String>,
    url: Option<String>,
    user: Option<String>,
    password: Option<String>,
    include_credentials: Option<bool>,
    timeout_millis: Option<u32>,
    headers: Vec<(String, String)>,
    query_params: Vec<(String, Vec<String>)>,
    path_params: Vec<(String, String)>,
    body: Option<B>,
    body_encoder: Option<&'static dyn Encoder<B>>,
    response_decoder: Option<&'static dyn Decoder<R>>,
    callback: Option<Box<dyn RestCallback<R>>>,
}

impl<B, R> Default for RestRequestBuilder<B, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, R> RestRequestBuilder<B, R> {
    pub fn new() -> Self {
        Self {
            method: None,
            application_path: None,
            url: None,
            user: None,
            password: None,
            include_credentials: None,
            timeout_millis: None,
            headers: Vec::new(),
            query_params: Vec::new(),
            path_params: Vec::new(),
            body: None,
            body_encoder: None,
            response_decoder: None,
            callback: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Per-request override of the process-wide application path.
    pub fn application_path(mut self, path: impl Into<String>) -> Self {
        self.application_path = Some(path.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn include_credentials(mut self, include: bool) -> Self {
        self.include_credentials = Some(include);
        self
    }

    /// Timeout in milliseconds before the transport fails the request.
    pub fn timeout(mut self, timeout_millis: u32) -> Self {
        self.timeout_millis = Some(timeout_millis);
        self
    }

    /// Adds a header, replacing an earlier value for the same name while
    /// keeping its position.
    pub fn add_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.headers.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.headers.push((name, value)),
        }
        self
    }

    pub fn add_path_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.path_params.push((name.into(), value.to_string()));
        self
    }

    pub fn add_query_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        let name = name.into();
        let value = value.to_string();
        match self.query_params.iter_mut().find(|(n, _)| *n == name) {
            Some((_, values)) => values.push(value),
            None => self.query_params.push((name, vec![value])),
        }
        self
    }

    pub fn add_query_params<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let name = name.into();
        for value in values {
            self = self.add_query_param(name.clone(), value);
        }
        self
    }

    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    pub fn body_encoder(mut self, encoder: &'static dyn Encoder<B>) -> Self {
        self.body_encoder = Some(encoder);
        self
    }

    pub fn response_decoder(mut self, decoder: &'static dyn Decoder<R>) -> Self {
        self.response_decoder = Some(decoder);
        self
    }

    pub fn callback(mut self, callback: impl RestCallback<R> + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn method_ref(&self) -> Option<Method> {
        self.method
    }

    pub fn url_ref(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn headers_ref(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    pub fn has_response_decoder(&self) -> bool {
        self.response_decoder.is_some()
    }

    /// Assembles the final [`RequestSpec`]: substitutes path parameters,
    /// prefixes the application path, appends the encoded query string and
    /// serializes the body.
    pub fn build(&self) -> Result<RequestSpec, RestError> {
        let method = self
            .method
            .ok_or_else(|| RestError::InvalidRequest("the method is required".to_string()))?;
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| RestError::InvalidRequest("the url is required".to_string()))?;

        let mut resolved = url.to_string();
        for (name, value) in &self.path_params {
            resolved = resolved.replace(&format!("{{{name}}}"), value);
        }

        let application_path = self
            .application_path
            .clone()
            .unwrap_or_else(default_application_path);
        if !application_path.is_empty() {
            resolved = join_paths(&application_path, &resolved);
        }

        let mut first = true;
        for (name, values) in &self.query_params {
            let encoded_name = encode_query_component(name);
            for value in values {
                resolved.push(if first { '?' } else { '&' });
                first = false;
                resolved.push_str(&encoded_name);
                resolved.push('=');
                resolved.push_str(&encode_query_component(value));
            }
        }

        let mut headers = vec![(
            "Content-Type".to_string(),
            "application/json; charset=utf-8".to_string(),
        )];
        for (name, value) in &self.headers {
            match headers.iter_mut().find(|(n, _)| n == name) {
                Some(slot) => slot.1 = value.clone(),
                None => headers.push((name.clone(), value.clone())),
            }
        }

        let body = match (&self.body, self.body_encoder) {
            (Some(body), Some(encoder)) => Some(encoder.write(body)?),
            (Some(_), None) => {
                return Err(RestError::InvalidRequest(
                    "a body requires a body encoder".to_string(),
                ));
            }
            (None, _) => None,
        };

        Ok(RequestSpec {
            method,
            url: resolved,
            headers,
            body,
            user: self.user.clone(),
            password: self.password.clone(),
            include_credentials: self.include_credentials,
            timeout_millis: self.timeout_millis,
        })
    }

    /// Builds the request and hands it to the transport. The registered
    /// callback receives exactly one completion.
    pub fn send(self, transport: &dyn Transport) -> Result<RequestHandle, RestError> {
        let spec = self.build()?;
        let dispatcher = ResponseDispatcher::new(self.response_decoder, self.callback);
        Ok(transport.execute(spec, Box::new(move |outcome| dispatcher.dispatch(outcome))))
    }
}
