//! Service declaration schema as read from YAML or JSON input.

use serde::{Deserialize, Serialize};

/// Root of a schema document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceSchema {
    /// Prefix prepended to every request URL at runtime unless a builder
    /// overrides it
    #[serde(default)]
    pub application_path: String,
    #[serde(default)]
    pub services: Vec<ServiceDecl>,
}

/// One REST service interface
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceDecl {
    pub name: String,
    /// Base URL template shared by every method of the service
    pub path: String,
    /// Service-level request media types, inherited by methods
    #[serde(default)]
    pub consumes: Vec<String>,
    /// Service-level response media types, inherited by methods
    #[serde(default)]
    pub produces: Vec<String>,
    /// `use` paths copied into the generated builder source
    #[serde(default)]
    pub uses: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

/// One endpoint method of a service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    /// HTTP verb name; methods with unsupported verbs are skipped
    #[serde(default)]
    pub verb: String,
    /// URL template suffix joined onto the service path
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub consumes: Vec<String>,
    #[serde(default)]
    pub produces: Vec<String>,
    /// Declared return type; `Response` requires a `response_type` override
    #[serde(default)]
    pub returns: Option<String>,
    /// Decoded payload type when `returns` is the raw response wrapper
    #[serde(default)]
    pub response_type: Option<String>,
    /// Excludes the method from generation entirely
    #[serde(default)]
    pub ignore: bool,
    #[serde(default)]
    pub params: Vec<ParamDecl>,
}

/// One method parameter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    /// Declared Rust type of the generated argument
    #[serde(rename = "type")]
    pub ty: String,
    /// Wire name of the path placeholder this parameter fills
    #[serde(default)]
    pub path: Option<String>,
    /// Wire name of the query entry this parameter fills
    #[serde(default)]
    pub query: Option<String>,
    /// Ambient data, excluded from the request
    #[serde(default)]
    pub context: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_schema_deserializes_with_defaults() {
        let yaml = r#"
application_path: api
services:
  - name: GreetingResource
    path: hello
    methods:
      - name: hello
        verb: GET
        returns: Greeting
      - name: greet
        verb: POST
        path: "{id}"
        params:
          - name: id
            type: String
            path: id
          - name: request
            type: GreetingRequest
"#;
        let schema: ServiceSchema = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(schema.application_path, "api");
        assert_eq!(schema.services.len(), 1);

        let service = &schema.services[0];
        assert_eq!(service.name, "GreetingResource");
        assert!(service.consumes.is_empty());

        let greet = &service.methods[1];
        assert_eq!(greet.params[0].path.as_deref(), Some("id"));
        assert_eq!(greet.params[1].ty, "GreetingRequest");
        assert!(greet.params[1].path.is_none());
        assert!(!greet.ignore);
    }

    #[test]
    fn json_schema_deserializes() {
        let json = r#"{
            "services": [
                {
                    "name": "Echo",
                    "path": "echo",
                    "methods": [
                        {"name": "ignored", "verb": "GET", "ignore": true}
                    ]
                }
            ]
        }"#;
        let schema: ServiceSchema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.application_path, "");
        assert!(schema.services[0].methods[0].ignore);
    }
}
