//! CORS autogeneration trigger.

use crate::opconfig::ServiceConfig;

/// Whether this service asked for autogenerated CORS methods.
///
/// The signal is an endpoint entry whose name matches the service name and
/// that sets `allowCors`. Entries under other names belong to other
/// deployments of the same config and are ignored.
pub fn autogen_cors_required(service: &ServiceConfig) -> bool {
    service
        .endpoints
        .iter()
        .any(|endpoint| endpoint.name == service.name && endpoint.allow_cors)
}
