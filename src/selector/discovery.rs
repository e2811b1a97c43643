//! Discovery-API suppression.
//!
//! APIs under the `google.discovery` namespace are service-infrastructure
//! surface, not user traffic. Resolution passes skip them unless the
//! generator was explicitly told to keep them. The predicates here stay
//! pure; call sites own the skip warning.

/// Name prefix shared by every discovery API.
pub const DISCOVERY_API_PREFIX: &str = "google.discovery";

/// Whether an API name (or a selector, which starts with one) belongs to
/// the discovery family.
pub fn is_discovery_api(name: &str) -> bool {
    name.starts_with(DISCOVERY_API_PREFIX)
}

/// Whether `name` must be excluded from resolved outputs for this run.
pub fn is_suppressed(name: &str, allow_discovery_apis: bool) -> bool {
    !allow_discovery_apis && is_discovery_api(name)
}
