//! # Resolution passes over a service configuration
//!
//! Each pass walks a [`ServiceConfig`][crate::opconfig::ServiceConfig] once
//! and produces either a selector-keyed table or a single decision for the
//! filter builders to consume. Every pass honors discovery-API suppression:
//! a suppressed API or rule is skipped with a warning and never reaches an
//! output.

pub mod api_key;
pub mod api_names;
pub mod backend;
pub mod cors;
pub mod usage;

pub use api_key::{api_key_parameters_by_selector, API_KEY_PARAMETER_NAME};
pub use api_names::{api_name_list, api_name_set};
pub use backend::grpc_support_required;
pub use cors::autogen_cors_required;
pub use usage::usage_rules_by_selector;
