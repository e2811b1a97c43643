//! # Generator Options
//!
//! Deployment-level options for a configuration-generation pass. Options
//! are read-only inputs, exactly like the service configuration itself: a
//! pass never mutates them, and two passes with equal inputs produce equal
//! tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Local backend address assumed when none is configured.
pub const DEFAULT_BACKEND_ADDRESS: &str = "http://127.0.0.1:8082";

/// Read-only options for one configuration-generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Address of the local backend the proxy fronts. The scheme decides
    /// whether gRPC support is required regardless of any backend rules.
    #[serde(alias = "backend_address")]
    pub backend_address: String,

    /// When set, backend addresses are overridden at deploy time and
    /// per-rule address inference is skipped entirely.
    #[serde(alias = "enable_backend_address_override")]
    pub enable_backend_address_override: bool,

    /// Whether discovery APIs take part in configuration generation.
    /// When false, discovery selectors are skipped with a warning wherever
    /// they appear.
    #[serde(alias = "allow_discovery_apis")]
    pub allow_discovery_apis: bool,

    /// How generated filters behave when a remote dependency fails at
    /// initialization. Parsed here, stamped into filter configs by the
    /// downstream filter builders.
    #[serde(alias = "dependency_error_behavior")]
    pub dependency_error_behavior: DependencyErrorBehavior,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            backend_address: DEFAULT_BACKEND_ADDRESS.to_string(),
            enable_backend_address_override: false,
            allow_discovery_apis: false,
            dependency_error_behavior: DependencyErrorBehavior::default(),
        }
    }
}

impl GeneratorOptions {
    /// Create options from environment variables
    pub fn from_env() -> Result<Self> {
        let backend_address = std::env::var("OPFLOW_BACKEND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BACKEND_ADDRESS.to_string());

        let enable_backend_address_override =
            bool_from_env("OPFLOW_ENABLE_BACKEND_ADDRESS_OVERRIDE")?;
        let allow_discovery_apis = bool_from_env("OPFLOW_ALLOW_DISCOVERY_APIS")?;

        let dependency_error_behavior = match std::env::var("OPFLOW_DEPENDENCY_ERROR_BEHAVIOR") {
            Ok(value) => value.parse()?,
            Err(_) => DependencyErrorBehavior::default(),
        };

        Ok(Self {
            backend_address,
            enable_backend_address_override,
            allow_discovery_apis,
            dependency_error_behavior,
        })
    }
}

fn bool_from_env(name: &str) -> Result<bool> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<bool>()
            .map_err(|e| Error::config(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(false),
    }
}

/// Behavior of a generated filter when one of its remote dependencies
/// fails at initialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DependencyErrorBehavior {
    /// Defer to the proxy's built-in default.
    #[default]
    Unspecified,
    /// Block filter chain initialization until every dependency is ready.
    BlockInitOnAnyError,
    /// Initialize the filter chain even if some dependencies failed.
    AlwaysInit,
}

/// Accepted wire spellings, alphabetical for error messages.
const DEPENDENCY_ERROR_BEHAVIOR_VALUES: [&str; 3] =
    ["ALWAYS_INIT", "BLOCK_INIT_ON_ANY_ERROR", "UNSPECIFIED"];

impl FromStr for DependencyErrorBehavior {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "UNSPECIFIED" => Ok(Self::Unspecified),
            "BLOCK_INIT_ON_ANY_ERROR" => Ok(Self::BlockInitOnAnyError),
            "ALWAYS_INIT" => Ok(Self::AlwaysInit),
            other => Err(Error::config(format!(
                "Unknown dependency error behavior {:?}, accepted values are: {}",
                other,
                DEPENDENCY_ERROR_BEHAVIOR_VALUES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for DependencyErrorBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            DependencyErrorBehavior::Unspecified => "UNSPECIFIED",
            DependencyErrorBehavior::BlockInitOnAnyError => "BLOCK_INIT_ON_ANY_ERROR",
            DependencyErrorBehavior::AlwaysInit => "ALWAYS_INIT",
        };
        write!(f, "{}", value)
    }
}
