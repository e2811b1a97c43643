//! Backend protocol inspection.

use crate::config::GeneratorOptions;
use crate::errors::{Error, Result};
use crate::opconfig::ServiceConfig;
use crate::selector::discovery;
use crate::utils::address::is_backend_grpc;

/// Decide whether any backend this service routes to speaks gRPC, which
/// determines whether gRPC-aware filters get installed at all.
///
/// The local backend address is checked first and is decisive on its own
/// when it is gRPC. Dynamic-routing rules are then scanned in
/// configuration order, and the scan stops at the first rule with no
/// address: such a rule marks the boundary of the routed portion of the
/// config, so the answer is `false` even if a later rule names a gRPC
/// backend.
pub fn grpc_support_required(service: &ServiceConfig, options: &GeneratorOptions) -> Result<bool> {
    let local_is_grpc = is_backend_grpc(&options.backend_address)
        .map_err(|source| Error::address_parse("local", source))?;
    if local_is_grpc {
        return Ok(true);
    }

    if options.enable_backend_address_override {
        // All traffic goes to the local backend, already known not to be
        // gRPC; the rules are irrelevant.
        return Ok(false);
    }

    for rule in &service.backend.rules {
        if discovery::is_suppressed(&rule.selector, options.allow_discovery_apis) {
            tracing::warn!(
                selector = %rule.selector,
                "Skipping backend rule: discovery APIs are not supported"
            );
            continue;
        }
        if rule.address.is_empty() {
            tracing::info!(selector = %rule.selector, "Backend rule has no dynamic routing address");
            return Ok(false);
        }
        if is_backend_grpc(&rule.address)
            .map_err(|source| Error::address_parse(&rule.selector, source))?
        {
            return Ok(true);
        }
    }

    Ok(false)
}
