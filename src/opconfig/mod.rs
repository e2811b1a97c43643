//! # OP service configuration model
//!
//! Plain-data model of the declarative One Platform ("OP") service
//! configuration a generation pass consumes: APIs and their methods,
//! routing endpoints, backend rules, usage rules, and system parameters.
//!
//! The model is deliberately read-only from this crate's point of view.
//! Fetching and loading the document is the embedding application's job;
//! [`ServiceConfig::from_value`] is only the typed-deserialization seam.
//! Field names follow the camelCase JSON of the source documents, with
//! snake_case aliases accepted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Error;

/// Root of the OP service configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceConfig {
    /// Service name, e.g. `"bookstore.endpoints.example.cloud.goog"`.
    pub name: String,

    /// APIs (gRPC service surfaces) declared by the service, in
    /// declaration order.
    pub apis: Vec<Api>,

    /// Routing entries. An endpoint whose name equals the service name and
    /// allows CORS turns on CORS-method autogeneration for the whole pass.
    pub endpoints: Vec<Endpoint>,

    /// Dynamic-routing backend rules.
    pub backend: Backend,

    /// User-declared usage rules.
    pub usage: Usage,

    /// System parameter rules (API key locations and the like).
    #[serde(alias = "system_parameters")]
    pub system_parameters: SystemParameters,
}

impl ServiceConfig {
    /// Deserialize a service configuration from a JSON value.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        serde_json::from_value(value)
            .map_err(|e| Error::config(format!("Invalid service configuration JSON: {}", e)))
    }
}

/// Named group of methods. API identity is its fully-qualified name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Api {
    pub name: String,
    /// Methods in declaration order.
    pub methods: Vec<Method>,
}

/// A single RPC operation, scoped to its owning API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Method {
    pub name: String,
}

/// Routing entry for the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Endpoint {
    pub name: String,
    /// Whether cross-origin requests are allowed through this endpoint.
    #[serde(alias = "allow_cors")]
    pub allow_cors: bool,
}

/// Dynamic-routing backend configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Backend {
    pub rules: Vec<BackendRule>,
}

/// Per-selector backend override. An empty address means the selector has
/// no dynamic routing and is served by the local backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendRule {
    pub selector: String,
    pub address: String,
}

/// User-declared usage configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub rules: Vec<UsageRule>,
}

/// Per-selector usage policy. User-declared rules always take precedence
/// over the generator's implicit defaults for the same selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UsageRule {
    pub selector: String,
    #[serde(alias = "allow_unregistered_calls")]
    pub allow_unregistered_calls: bool,
    #[serde(alias = "skip_service_control")]
    pub skip_service_control: bool,
}

/// System parameter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemParameters {
    pub rules: Vec<SystemParameterRule>,
}

/// Per-selector list of named system parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemParameterRule {
    pub selector: String,
    pub parameters: Vec<SystemParameter>,
}

/// A named system parameter and the request locations it can be read from.
/// Only parameters named `api_key` matter to this crate, but the locations
/// are carried through for the downstream extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemParameter {
    pub name: String,
    #[serde(alias = "http_header")]
    pub http_header: Option<String>,
    #[serde(alias = "url_query_parameter")]
    pub url_query_parameter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_document() {
        let config = ServiceConfig::from_value(json!({
            "name": "bookstore.endpoints.example.cloud.goog",
            "apis": [
                {
                    "name": "endpoints.examples.bookstore.Bookstore",
                    "methods": [{ "name": "ListShelves" }, { "name": "CreateShelf" }]
                }
            ],
            "endpoints": [
                { "name": "bookstore.endpoints.example.cloud.goog", "allowCors": true }
            ],
            "backend": {
                "rules": [
                    {
                        "selector": "endpoints.examples.bookstore.Bookstore.ListShelves",
                        "address": "grpcs://shelves.run.app"
                    }
                ]
            },
            "usage": {
                "rules": [
                    {
                        "selector": "endpoints.examples.bookstore.Bookstore.ListShelves",
                        "allowUnregisteredCalls": true
                    }
                ]
            },
            "systemParameters": {
                "rules": [
                    {
                        "selector": "endpoints.examples.bookstore.Bookstore.ListShelves",
                        "parameters": [
                            { "name": "api_key", "urlQueryParameter": "key" }
                        ]
                    }
                ]
            }
        }))
        .expect("deserialize service config");

        assert_eq!(config.apis.len(), 1);
        assert_eq!(config.apis[0].methods[1].name, "CreateShelf");
        assert!(config.endpoints[0].allow_cors);
        assert_eq!(config.backend.rules[0].address, "grpcs://shelves.run.app");
        assert!(config.usage.rules[0].allow_unregistered_calls);
        assert!(!config.usage.rules[0].skip_service_control);
        assert_eq!(
            config.system_parameters.rules[0].parameters[0].url_query_parameter.as_deref(),
            Some("key")
        );
    }

    #[test]
    fn snake_case_aliases_are_accepted() {
        let config = ServiceConfig::from_value(json!({
            "name": "svc",
            "endpoints": [{ "name": "svc", "allow_cors": true }],
            "system_parameters": {
                "rules": [{ "selector": "a.B", "parameters": [{ "name": "api_key", "http_header": "x-key" }] }]
            }
        }))
        .expect("deserialize with aliases");

        assert!(config.endpoints[0].allow_cors);
        assert_eq!(
            config.system_parameters.rules[0].parameters[0].http_header.as_deref(),
            Some("x-key")
        );
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let config = ServiceConfig::from_value(json!({ "name": "svc" })).expect("minimal config");
        assert!(config.apis.is_empty());
        assert!(config.backend.rules.is_empty());
        assert!(config.usage.rules.is_empty());
        assert!(config.system_parameters.rules.is_empty());
    }

    #[test]
    fn type_mismatch_is_a_config_error() {
        let error = ServiceConfig::from_value(json!({ "apis": "not-a-list" }))
            .expect_err("string apis should fail");
        assert!(matches!(error, Error::Config(_)));
        assert!(error.to_string().contains("Invalid service configuration"));
    }
}
