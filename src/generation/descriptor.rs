//! The descriptor model - the intermediate representation between parsed
//! service declarations and rendered client code.
//!
//! Descriptors are immutable once built: construction of a method either
//! fully succeeds or routes the method into the service's error list.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::generation::errors::MethodErrorKind;

/// HTTP verbs eligible for client generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Head,
}

impl HttpVerb {
    /// Wire-format name, e.g. `GET`
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Head => "HEAD",
        }
    }

    /// Variant name of the runtime `restforge_api::Method` enum, used when
    /// rendering the builder chain.
    pub fn variant_name(&self) -> &'static str {
        match self {
            HttpVerb::Get => "Get",
            HttpVerb::Post => "Post",
            HttpVerb::Put => "Put",
            HttpVerb::Delete => "Delete",
            HttpVerb::Head => "Head",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpVerb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpVerb::Get),
            "POST" => Ok(HttpVerb::Post),
            "PUT" => Ok(HttpVerb::Put),
            "DELETE" => Ok(HttpVerb::Delete),
            "HEAD" => Ok(HttpVerb::Head),
            _ => Err(format!("unsupported HTTP verb: {s}")),
        }
    }
}

/// Role of one method parameter in the generated request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum ParamRole {
    /// Substituted into a `{name}` placeholder of the URL template
    Path { name: String },
    /// Appended as a query string entry
    Query { name: String },
    /// Ambient server-side data; excluded from the generated signature
    Context,
    /// Serialized as the request payload
    Body,
}

/// One classified method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterBinding {
    /// Parameter name as declared (the generated argument name)
    pub var: String,
    /// Declared Rust type
    pub ty: String,
    pub role: ParamRole,
}

/// The at-most-one parameter serialized as the request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyParameter {
    pub var: String,
    pub ty: String,
}

/// Capability of a synthesized codec binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CodecKind {
    /// Response decoding only
    Decoder,
    /// Body encoding only
    Encoder,
    /// Both directions; types appearing as body and return share one binding
    Codec,
}

impl CodecKind {
    pub fn accessor_prefix(&self) -> &'static str {
        match self {
            CodecKind::Decoder => "decoder",
            CodecKind::Encoder => "encoder",
            CodecKind::Codec => "codec",
        }
    }
}

/// Maps one payload type to its lazily created singleton codec accessor
/// inside the generated builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodecBinding {
    pub ty: String,
    pub kind: CodecKind,
    /// Collision-free accessor name, e.g. `decoder_1`
    pub accessor: String,
}

/// One REST-eligible method, fully resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDescriptor {
    /// Generated function name (snake_case, deduplicated on collision)
    pub fn_name: String,
    /// Method name as declared in the schema
    pub source_name: String,
    pub verb: HttpVerb,
    /// Absolute URL template; braces contain only parameter names
    pub url: String,
    /// All parameters in declaration order, context ones included
    pub params: Vec<ParameterBinding>,
    pub body: Option<BodyParameter>,
    pub return_type: Option<String>,
    /// First JSON media type from the effective consumes declaration
    pub consumes: Option<String>,
    pub produces: Option<String>,
}

/// A method that failed descriptor construction, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodError {
    /// Source method name
    pub method: String,
    pub kind: MethodErrorKind,
}

/// Aggregate descriptor for one declared service
#[derive(Debug, Clone)]
pub struct ServiceDescriptor {
    pub name: String,
    /// `<name>Builder`
    pub builder_name: String,
    /// snake_case module name of the generated source file
    pub module_name: String,
    pub base_url: String,
    /// `use` paths emitted at the top of the generated file
    pub uses: Vec<String>,
    pub methods: Vec<MethodDescriptor>,
    pub errors: Vec<MethodError>,
    /// Distinct body payload types, insertion order preserved
    pub body_types: Vec<String>,
    /// Distinct non-void return types, insertion order preserved
    pub return_types: Vec<String>,
    pub codecs: Vec<CodecBinding>,
}

/// Generated artifact ready to be written out
#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}
