//! Parameter classification for endpoint methods.

use crate::generation::descriptor::{BodyParameter, ParamRole, ParameterBinding};
use crate::generation::errors::MethodErrorKind;
use crate::infrastructure::schema::ParamDecl;

/// Classifies every declared parameter into path, query, context or body.
///
/// Path and query bindings carry the declared wire name, which may differ
/// from the variable name. A parameter with no marker at all is the body
/// payload, and there can be at most one of those.
pub fn classify(
    params: &[ParamDecl],
) -> Result<(Vec<ParameterBinding>, Option<BodyParameter>), MethodErrorKind> {
    let mut bindings = Vec::with_capacity(params.len());
    let mut body: Option<BodyParameter> = None;

    for param in params {
        let role = if let Some(name) = &param.path {
            ParamRole::Path { name: name.clone() }
        } else if let Some(name) = &param.query {
            ParamRole::Query { name: name.clone() }
        } else if param.context {
            ParamRole::Context
        } else {
            if body.is_some() {
                return Err(MethodErrorKind::MoreThanOneBodyParam);
            }
            body = Some(BodyParameter {
                var: param.name.clone(),
                ty: param.ty.clone(),
            });
            ParamRole::Body
        };
        bindings.push(ParameterBinding {
            var: param.name.clone(),
            ty: param.ty.clone(),
            role,
        });
    }

    Ok((bindings, body))
}
