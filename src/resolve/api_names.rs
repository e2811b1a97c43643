//! API name enumeration.

use std::collections::HashSet;

use crate::config::GeneratorOptions;
use crate::opconfig::ServiceConfig;
use crate::selector::discovery;

/// API names in configuration order, for outputs where order is visible.
pub fn api_name_list(service: &ServiceConfig, options: &GeneratorOptions) -> Vec<String> {
    let mut names = Vec::with_capacity(service.apis.len());
    for api in &service.apis {
        if discovery::is_suppressed(&api.name, options.allow_discovery_apis) {
            tracing::warn!(api = %api.name, "Skipping API: discovery APIs are not supported");
            continue;
        }
        names.push(api.name.clone());
    }
    names
}

/// Distinct API names carried by the service, for membership checks.
pub fn api_name_set(service: &ServiceConfig, options: &GeneratorOptions) -> HashSet<String> {
    api_name_list(service, options).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opconfig::Api;

    fn service_with_apis(names: &[&str]) -> ServiceConfig {
        ServiceConfig {
            apis: names
                .iter()
                .map(|name| Api { name: (*name).into(), ..Default::default() })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn list_preserves_configuration_order() {
        let service = service_with_apis(&["b.Second", "a.First", "c.Third"]);
        let names = api_name_list(&service, &GeneratorOptions::default());
        assert_eq!(names, vec!["b.Second", "a.First", "c.Third"]);
    }

    #[test]
    fn discovery_apis_are_dropped_by_default() {
        let service = service_with_apis(&["google.discovery.Discovery", "library.Books"]);
        let options = GeneratorOptions::default();

        assert_eq!(api_name_list(&service, &options), vec!["library.Books"]);
        assert!(!api_name_set(&service, &options).contains("google.discovery.Discovery"));
    }

    #[test]
    fn discovery_apis_survive_when_allowed() {
        let service = service_with_apis(&["google.discovery.Discovery", "library.Books"]);
        let options = GeneratorOptions { allow_discovery_apis: true, ..Default::default() };

        let set = api_name_set(&service, &options);
        assert!(set.contains("google.discovery.Discovery"));
        assert!(set.contains("library.Books"));
        assert_eq!(set.len(), 2);
    }
}
