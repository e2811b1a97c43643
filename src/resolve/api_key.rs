//! API-key parameter extraction.

use std::collections::HashMap;

use crate::config::GeneratorOptions;
use crate::opconfig::{ServiceConfig, SystemParameter};
use crate::selector::discovery;

/// Name under which API-key locations are declared in system parameters.
pub const API_KEY_PARAMETER_NAME: &str = "api_key";

/// Collect the API-key bindings of every selector that declares a system
/// parameter rule.
///
/// A selector whose rule mentions no `api_key` parameter still gets an
/// entry, with an empty list. Downstream consumers use that to tell
/// "configured with no custom locations" apart from "not configured at
/// all", which fall back to different defaults.
pub fn api_key_parameters_by_selector(
    service: &ServiceConfig,
    options: &GeneratorOptions,
) -> HashMap<String, Vec<SystemParameter>> {
    let mut parameters = HashMap::new();

    for rule in &service.system_parameters.rules {
        if discovery::is_suppressed(&rule.selector, options.allow_discovery_apis) {
            tracing::warn!(
                selector = %rule.selector,
                "Skipping system parameter rule: discovery APIs are not supported"
            );
            continue;
        }
        let bindings: Vec<SystemParameter> = rule
            .parameters
            .iter()
            .filter(|parameter| parameter.name == API_KEY_PARAMETER_NAME)
            .cloned()
            .collect();
        parameters.insert(rule.selector.clone(), bindings);
    }

    parameters
}
