//! Usage rule resolution.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::config::GeneratorOptions;
use crate::opconfig::{ServiceConfig, UsageRule};
use crate::selector::{self, discovery};

/// Selectors whose operations bypass service control unless the user says
/// otherwise. Health probes are high-frequency and carry no quota or
/// billing meaning.
static SKIP_SERVICE_CONTROL_SELECTORS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["grpc.health.v1.Health.Check", "grpc.health.v1.Health.Watch"]));

/// Resolve the effective usage rule for every selector that has one.
///
/// User-authored rules are seeded first; when the same selector appears
/// more than once the last occurrence wins. Defaults for the well-known
/// health-check methods are then filled in, but only where the service
/// actually exposes the method and the user left its selector
/// unconfigured.
pub fn usage_rules_by_selector(
    service: &ServiceConfig,
    options: &GeneratorOptions,
) -> HashMap<String, UsageRule> {
    let mut rules = HashMap::new();

    for rule in &service.usage.rules {
        if discovery::is_suppressed(&rule.selector, options.allow_discovery_apis) {
            tracing::warn!(
                selector = %rule.selector,
                "Skipping usage rule: discovery APIs are not supported"
            );
            continue;
        }
        rules.insert(rule.selector.clone(), rule.clone());
    }

    for api in &service.apis {
        for method in &api.methods {
            let selector = selector::method_selector(api, method);
            if SKIP_SERVICE_CONTROL_SELECTORS.contains(selector.as_str())
                && !rules.contains_key(&selector)
            {
                rules.insert(
                    selector.clone(),
                    UsageRule {
                        selector,
                        allow_unregistered_calls: false,
                        skip_service_control: true,
                    },
                );
            }
        }
    }

    rules
}
