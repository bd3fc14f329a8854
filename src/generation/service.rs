//! Service descriptor construction: aggregates method outcomes, dedupes
//! names and type sets, and synthesizes codec bindings.

use crate::generation::codecs;
use crate::generation::descriptor::ServiceDescriptor;
use crate::generation::errors::GenerationError;
use crate::generation::method::{self, MethodOutcome};
use crate::generation::utils;
use crate::infrastructure::schema::ServiceDecl;

/// Builds the full descriptor for one declared service.
pub fn build_service(decl: &ServiceDecl) -> Result<ServiceDescriptor, GenerationError> {
    if decl.name.trim().is_empty() {
        return Err(GenerationError::ValidationError(
            "service has no name".into(),
        ));
    }
    if decl.path.trim().is_empty() {
        return Err(GenerationError::ValidationError(format!(
            "service {} has no base path",
            decl.name
        )));
    }

    let mut methods = Vec::new();
    let mut errors = Vec::new();
    for method_decl in &decl.methods {
        match method::build_method(decl, method_decl) {
            MethodOutcome::Eligible(desc) => methods.push(desc),
            MethodOutcome::Skipped => {}
            MethodOutcome::Failed(err) => errors.push(err),
        }
    }

    dedup_fn_names(&mut methods);

    let mut body_types = Vec::new();
    let mut return_types = Vec::new();
    for method in &methods {
        if let Some(body) = &method.body {
            push_unique(&mut body_types, &body.ty);
        }
        if let Some(ret) = &method.return_type {
            push_unique(&mut return_types, ret);
        }
    }

    let codecs = codecs::synthesize(&body_types, &return_types);

    Ok(ServiceDescriptor {
        name: decl.name.clone(),
        builder_name: format!("{}Builder", decl.name),
        module_name: format!("{}_builder", utils::to_snake_case(&decl.name)),
        base_url: decl.path.clone(),
        uses: decl.uses.clone(),
        methods,
        errors,
        body_types,
        return_types,
        codecs,
    })
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|existing| existing == value) {
        list.push(value.to_string());
    }
}

/// Colliding function names keep declaration order; the second occurrence
/// becomes `name_2`, the third `name_3`, and so on.
fn dedup_fn_names(methods: &mut [crate::generation::descriptor::MethodDescriptor]) {
    let names: Vec<String> = methods.iter().map(|m| m.fn_name.clone()).collect();
    for i in 0..methods.len() {
        let occurrence = names[..i].iter().filter(|n| **n == names[i]).count();
        if occurrence > 0 {
            methods[i].fn_name = format!("{}_{}", names[i], occurrence + 1);
        }
    }
}
