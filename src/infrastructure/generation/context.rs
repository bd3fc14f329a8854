//! Builds the Tera render context for one service descriptor.

use serde_json::{Value, json};

use crate::generation::codecs;
use crate::generation::descriptor::{MethodDescriptor, ParamRole, ServiceDescriptor};
use crate::generation::errors::GenerationError;

/// Type emitted for an absent body or return payload
const UNIT: &str = "()";

/// Flattens a service descriptor into the variables the builder template
/// consumes. Signature strings are precomputed here so the template stays
/// free of comma bookkeeping.
pub fn service_context(service: &ServiceDescriptor) -> Result<tera::Context, GenerationError> {
    let methods: Vec<Value> = service
        .methods
        .iter()
        .map(|method| method_context(service, method))
        .collect::<Result<_, _>>()?;

    let codecs: Vec<Value> = service
        .codecs
        .iter()
        .map(|codec| json!({ "accessor": codec.accessor, "ty": codec.ty }))
        .collect();

    let mut context = tera::Context::new();
    context.insert("service_name", &service.name);
    context.insert("builder_name", &service.builder_name);
    context.insert("uses", &service.uses);
    context.insert("codecs", &codecs);
    context.insert("methods", &methods);
    Ok(context)
}

fn method_context(
    service: &ServiceDescriptor,
    method: &MethodDescriptor,
) -> Result<Value, GenerationError> {
    let mut args: Vec<String> = Vec::new();
    let mut arg_names: Vec<String> = Vec::new();
    let mut path_params: Vec<Value> = Vec::new();
    let mut query_params: Vec<Value> = Vec::new();

    for param in &method.params {
        match &param.role {
            ParamRole::Path { name } => {
                args.push(format!("{}: {}", param.var, param.ty));
                arg_names.push(param.var.clone());
                path_params.push(json!({ "name": name, "var": param.var }));
            }
            ParamRole::Query { name } => {
                args.push(format!("{}: {}", param.var, param.ty));
                arg_names.push(param.var.clone());
                query_params.push(json!({ "name": name, "var": param.var }));
            }
            ParamRole::Body => {
                args.push(format!("{}: {}", param.var, param.ty));
                arg_names.push(param.var.clone());
            }
            ParamRole::Context => {}
        }
    }

    let body = match &method.body {
        Some(body) => {
            let encoder = codecs::encoder_for(&service.codecs, &body.ty).ok_or_else(|| {
                GenerationError::RenderError(format!(
                    "no encoder synthesized for body type {} of {}",
                    body.ty, method.fn_name
                ))
            })?;
            Some(json!({ "var": body.var, "ty": body.ty, "encoder": encoder }))
        }
        None => None,
    };

    let decoder = match &method.return_type {
        Some(ty) => Some(
            codecs::decoder_for(&service.codecs, ty)
                .ok_or_else(|| {
                    GenerationError::RenderError(format!(
                        "no decoder synthesized for return type {ty} of {}",
                        method.fn_name
                    ))
                })?
                .to_string(),
        ),
        None => None,
    };

    let mut send_args = args.clone();
    send_args.push("transport: &dyn Transport".to_string());
    send_args.push(format!(
        "callback: impl RestCallback<{}> + 'static",
        method.return_type.as_deref().unwrap_or(UNIT)
    ));

    Ok(json!({
        "fn_name": method.fn_name,
        "source_name": method.source_name,
        "verb_variant": method.verb.variant_name(),
        "url": method.url,
        "fn_args": args.join(", "),
        "send_args": send_args.join(", "),
        "arg_names": arg_names.join(", "),
        "body": body,
        "decoder": decoder,
        "body_ty": method.body.as_ref().map_or(UNIT, |b| b.ty.as_str()),
        "return_ty": method.return_type.as_deref().unwrap_or(UNIT),
        "consumes": method.consumes,
        "produces": method.produces,
        "path_params": path_params,
        "query_params": query_params,
    }))
}

/// Context for the generated `mod.rs`.
pub fn module_context(
    application_path: &str,
    services: &[ServiceDescriptor],
) -> tera::Context {
    let modules: Vec<Value> = services
        .iter()
        .map(|s| json!({ "module_name": s.module_name, "builder_name": s.builder_name }))
        .collect();

    let mut context = tera::Context::new();
    context.insert("application_path", application_path);
    context.insert("modules", &modules);
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::service::build_service;
    use crate::infrastructure::schema::{MethodDecl, ParamDecl, ServiceDecl};

    fn descriptor() -> ServiceDescriptor {
        let decl = ServiceDecl {
            name: "GreetingResource".into(),
            path: "hello".into(),
            consumes: Vec::new(),
            produces: Vec::new(),
            uses: vec!["crate::model::GreetingResponse".into()],
            methods: vec![MethodDecl {
                name: "greet".into(),
                verb: "POST".into(),
                path: "{id}".into(),
                consumes: vec!["application/json".into()],
                produces: Vec::new(),
                returns: Some("GreetingResponse".into()),
                response_type: None,
                ignore: false,
                params: vec![
                    ParamDecl {
                        name: "id".into(),
                        ty: "u32".into(),
                        path: Some("id".into()),
                        query: None,
                        context: false,
                    },
                    ParamDecl {
                        name: "request".into(),
                        ty: "GreetingRequest".into(),
                        path: None,
                        query: None,
                        context: false,
                    },
                ],
            }],
        };
        build_service(&decl).unwrap()
    }

    #[test]
    fn method_context_precomputes_signatures() {
        let service = descriptor();
        let context = service_context(&service).unwrap();
        let json = context.into_json();

        let method = &json["methods"][0];
        assert_eq!(method["fn_name"], "greet");
        assert_eq!(method["fn_args"], "id: u32, request: GreetingRequest");
        assert_eq!(method["arg_names"], "id, request");
        assert_eq!(method["url"], "hello/{id}");
        assert_eq!(method["body"]["encoder"], "encoder_1");
        assert_eq!(method["decoder"], "decoder_1");
        assert_eq!(method["body_ty"], "GreetingRequest");
        assert_eq!(method["return_ty"], "GreetingResponse");
        assert_eq!(method["path_params"][0]["name"], "id");
        assert_eq!(method["consumes"], "application/json");
    }

    #[test]
    fn module_context_lists_every_service() {
        let service = descriptor();
        let context = module_context("api", std::slice::from_ref(&service));
        let json = context.into_json();
        assert_eq!(json["application_path"], "api");
        assert_eq!(json["modules"][0]["module_name"], "greeting_resource_builder");
    }
}
