//! Per-method descriptor construction.

use tracing::debug;

use crate::generation::descriptor::{HttpVerb, MethodDescriptor, MethodError};
use crate::generation::errors::MethodErrorKind;
use crate::generation::{media, params, urls, utils};
use crate::infrastructure::schema::{MethodDecl, ServiceDecl};

/// Return type name that stands for "raw response wrapper". Methods
/// declaring it must name the decoded payload type via `response_type`.
const RESPONSE_WRAPPER: &str = "Response";

/// Result of evaluating one declared method for generation.
#[derive(Debug, Clone)]
pub enum MethodOutcome {
    /// Generates a request-builder function
    Eligible(MethodDescriptor),
    /// Not a REST endpoint (ignored, unsupported verb, non-JSON media)
    Skipped,
    /// Would be an endpoint but is invalid; reported and excluded
    Failed(MethodError),
}

/// Evaluates one method declaration against its enclosing service.
pub fn build_method(service: &ServiceDecl, method: &MethodDecl) -> MethodOutcome {
    if method.ignore {
        debug!(method = %method.name, "skipping ignored method");
        return MethodOutcome::Skipped;
    }

    let verb: HttpVerb = match method.verb.parse() {
        Ok(verb) => verb,
        Err(reason) => {
            debug!(method = %method.name, %reason, "skipping method");
            return MethodOutcome::Skipped;
        }
    };

    let consumes = media::effective(&method.consumes, &service.consumes);
    let produces = media::effective(&method.produces, &service.produces);
    let consumed_json = media::first_json_type(consumes);
    let produced_json = media::first_json_type(produces);
    if (!consumes.is_empty() && consumed_json.is_none())
        || (!produces.is_empty() && produced_json.is_none())
    {
        debug!(method = %method.name, "skipping method with no JSON media type");
        return MethodOutcome::Skipped;
    }

    let fail = |kind: MethodErrorKind| {
        MethodOutcome::Failed(MethodError {
            method: method.name.clone(),
            kind,
        })
    };

    let url = match urls::normalize_template(&urls::join_url(&service.path, &method.path)) {
        Ok(url) => url,
        Err(kind) => return fail(kind),
    };

    let (bindings, body) = match params::classify(&method.params) {
        Ok(classified) => classified,
        Err(kind) => return fail(kind),
    };

    let return_type = match (&method.returns, &method.response_type) {
        (_, Some(override_ty)) => Some(override_ty.clone()),
        (Some(ty), None) if ty == RESPONSE_WRAPPER => {
            return fail(MethodErrorKind::MissingResponseTypeOverride);
        }
        (Some(ty), None) => Some(ty.clone()),
        (None, None) => None,
    };

    MethodOutcome::Eligible(MethodDescriptor {
        fn_name: utils::to_snake_case(&method.name),
        source_name: method.name.clone(),
        verb,
        url,
        params: bindings,
        body,
        return_type,
        consumes: consumed_json.map(str::to_string),
        produces: produced_json.map(str::to_string),
    })
}
