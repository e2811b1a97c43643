//! # Opflow
//!
//! Opflow normalizes One Platform service configurations into the resolved
//! inputs an Envoy filter generator consumes: canonical operation selectors,
//! per-selector usage and API-key tables, backend protocol decisions, and
//! typed-`Any` filter envelopes.
//!
//! ## Core Components
//!
//! - **Selector Codec**: builds `"Api.Method"` selectors and the reversible
//!   selectors of autogenerated CORS methods
//! - **Resolution Passes**: single walks over the service configuration
//!   producing selector-keyed usage and API-key tables, API name
//!   enumerations, and the gRPC backend decision
//! - **Filter Envelopes**: wraps typed protobuf configurations into Envoy
//!   HTTP and network filter registrations
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use opflow::{GeneratorOptions, Result, ServiceConfig};
//!
//! fn main() -> Result<()> {
//!     let service = ServiceConfig::from_value(serde_json::json!({
//!         "name": "library.endpoints.example.cloud.goog",
//!         "apis": [{"name": "library.Books", "methods": [{"name": "ListBooks"}]}]
//!     }))?;
//!     let options = GeneratorOptions::from_env()?;
//!     let grpc = opflow::resolve::grpc_support_required(&service, &options)?;
//!     println!("needs gRPC filters: {grpc}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod errors;
pub mod filters;
pub mod opconfig;
pub mod resolve;
pub mod selector;
pub mod utils;

// Re-export commonly used types and traits
pub use config::GeneratorOptions;
pub use errors::{Error, Result};
pub use opconfig::ServiceConfig;

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_available() {
        assert!(!VERSION.is_empty());
        assert_eq!(APP_NAME, "opflow");
    }
}
