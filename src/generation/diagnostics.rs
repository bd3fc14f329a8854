//! Diagnostic reporting for methods excluded from generation.

use tracing::{error, info, warn};

use crate::generation::descriptor::MethodError;
use crate::generation::errors::MethodErrorKind;

/// Severity assigned to a per-method failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Note,
    Warning,
    Error,
}

pub fn severity(kind: &MethodErrorKind) -> Severity {
    match kind {
        MethodErrorKind::MoreThanOneBodyParam => Severity::Warning,
        MethodErrorKind::MissingResponseTypeOverride => Severity::Note,
        MethodErrorKind::MalformedUrlTemplate | MethodErrorKind::Unexpected(_) => Severity::Error,
    }
}

/// Logs every collected method error for one service at its severity.
/// Generation continues for the remaining methods either way.
pub fn report(service_name: &str, errors: &[MethodError]) {
    for err in errors {
        match severity(&err.kind) {
            Severity::Note => {
                info!(service = service_name, method = %err.method, "{}", err.kind)
            }
            Severity::Warning => {
                warn!(service = service_name, method = %err.method, "{}", err.kind)
            }
            Severity::Error => {
                error!(service = service_name, method = %err.method, "{}", err.kind)
            }
        }
    }
}
