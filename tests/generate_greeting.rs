//! End-to-end generation test: loads a schema fixture from disk, runs the
//! full pipeline and inspects the emitted sources.

use std::path::Path;
use std::sync::Arc;

use restforge::generation::GenerationOrchestrator;
use restforge::infrastructure::{
    CompositeSchemaLoader, FileSystemArtifactWriter, TeraBuilderRenderer,
};

fn fixture(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

#[tokio::test]
async fn generates_the_greeting_builder_from_a_yaml_schema() {
    let out = tempfile::tempdir().unwrap();
    let orchestrator = GenerationOrchestrator::new(
        Arc::new(CompositeSchemaLoader::new()),
        Arc::new(TeraBuilderRenderer::new().unwrap()),
        Arc::new(FileSystemArtifactWriter::new()),
    );

    let result = orchestrator
        .generate(&fixture("greeting.yaml"), out.path())
        .await
        .unwrap();

    assert_eq!(result.modules, ["greeting_resource_builder"]);
    // `raw` returns the response wrapper without an override
    assert_eq!(result.error_count, 1);

    let builder =
        std::fs::read_to_string(out.path().join("greeting_resource_builder.rs")).unwrap();

    // one function per eligible endpoint, collision suffixed
    assert!(builder.contains("pub fn hello(name: String)"));
    assert!(builder.contains("pub fn greet(request: GreetingRequest)"));
    assert!(builder.contains("pub fn greet_2(id: u32, verbose: bool, request: GreetingRequest)"));

    // excluded methods leave no trace in the output
    assert!(!builder.contains("upload"));
    assert!(!builder.contains("internal"));
    assert!(!builder.contains("fn raw"));

    // constraint expressions are stripped from the emitted URL template
    assert!(builder.contains(".url(\"hello/{id}\")"));
    assert!(!builder.contains("[0-9]"));

    // the context parameter never reaches a generated signature
    assert!(!builder.contains("HttpContext"));

    // wiring for the body-carrying endpoint
    assert!(builder.contains(".method(Method::Post)"));
    assert!(builder.contains(".body(request)"));
    assert!(builder.contains(".add_header(\"Content-Type\", \"application/json\")"));
    assert!(builder.contains(".add_header(\"Accept\", \"application/json\")"));
    assert!(builder.contains(".add_path_param(\"id\", id)"));
    assert!(builder.contains(".add_query_param(\"verbose\", verbose)"));
    assert!(builder.contains(".add_query_param(\"name\", name)"));

    // one shared codec set for the whole service
    assert!(builder.contains("fn decoder_1() -> &'static JsonCodec<GreetingResponse>"));
    assert!(builder.contains("fn encoder_1() -> &'static JsonCodec<GreetingRequest>"));
    assert_eq!(builder.matches("fn decoder_").count(), 1);
    assert_eq!(builder.matches("fn encoder_").count(), 1);

    let module = std::fs::read_to_string(out.path().join("mod.rs")).unwrap();
    assert!(module.contains("pub mod greeting_resource_builder;"));
    assert!(module.contains("pub use greeting_resource_builder::GreetingResourceBuilder;"));
    assert!(module.contains("restforge_api::set_default_application_path(\"api\")"));
}
