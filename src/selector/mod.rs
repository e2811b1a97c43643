//! # Selector construction and decoding
//!
//! A *selector* is the canonical `"Api.Method"` identifier for an RPC
//! operation; every resolved table in this crate is keyed by one.
//! Autogenerated CORS methods get a synthetic selector built around a
//! reserved token, reversible back to the originating selector.

pub mod discovery;

use once_cell::sync::Lazy;

use crate::errors::{Error, Result};
use crate::opconfig::{Api, Method};

/// Prefix reserved for operations synthesized by the generator. User API
/// names never carry it, which is what makes CORS selectors reversible.
pub const AUTOGENERATED_OPERATION_PREFIX: &str = "Opflow_Autogenerated";

/// Delimiter embedded in every autogenerated CORS selector.
static CORS_OPERATION_DELIMITER: Lazy<String> =
    Lazy::new(|| format!(".{}_CORS_", AUTOGENERATED_OPERATION_PREFIX));

/// Canonical selector for a method: `"Api.Method"`.
pub fn method_selector(api: &Api, method: &Method) -> String {
    format!("{}.{}", api.name, method.name)
}

/// Selector of the autogenerated CORS method paired with `method`.
pub fn cors_selector(api: &Api, method: &Method) -> String {
    format!("{}{}{}", api.name, CORS_OPERATION_DELIMITER.as_str(), method.name)
}

/// Recover the originating selector from a CORS selector.
///
/// Returns `Ok(None)` when `selector` is not a CORS selector at all.
/// Fails only when the reserved delimiter is present but the selector does
/// not split into exactly an API part and a method part, which cannot
/// happen for selectors produced by [`cors_selector`].
pub fn decode_cors_selector(selector: &str) -> Result<Option<String>> {
    let delimiter = CORS_OPERATION_DELIMITER.as_str();
    if !selector.contains(delimiter) {
        return Ok(None);
    }

    let parts: Vec<&str> = selector.split(delimiter).collect();
    if parts.len() != 2 {
        return Err(Error::malformed_selector(
            selector,
            format!("split on the CORS delimiter produced {} parts, expected 2", parts.len()),
        ));
    }

    Ok(Some(format!("{}.{}", parts[0], parts[1])))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookstore() -> (Api, Method) {
        let method = Method { name: "ListShelves".into() };
        let api = Api {
            name: "endpoints.examples.bookstore.Bookstore".into(),
            methods: vec![method.clone()],
        };
        (api, method)
    }

    #[test]
    fn method_selector_joins_api_and_method() {
        let (api, method) = bookstore();
        assert_eq!(
            method_selector(&api, &method),
            "endpoints.examples.bookstore.Bookstore.ListShelves"
        );
    }

    #[test]
    fn cors_selector_embeds_the_reserved_token() {
        let (api, method) = bookstore();
        assert_eq!(
            cors_selector(&api, &method),
            "endpoints.examples.bookstore.Bookstore.Opflow_Autogenerated_CORS_ListShelves"
        );
    }

    #[test]
    fn cors_selector_round_trips() {
        let (api, method) = bookstore();
        let decoded = decode_cors_selector(&cors_selector(&api, &method)).expect("decode");
        assert_eq!(decoded, Some(method_selector(&api, &method)));
    }

    #[test]
    fn ordinary_selector_is_not_cors() {
        let decoded = decode_cors_selector("grpc.health.v1.Health.Check").expect("decode");
        assert_eq!(decoded, None);
    }

    #[test]
    fn repeated_delimiter_is_malformed() {
        let selector = format!(
            "a{delim}b{delim}c",
            delim = format!(".{}_CORS_", AUTOGENERATED_OPERATION_PREFIX)
        );
        let error = decode_cors_selector(&selector).expect_err("three parts should fail");
        assert!(matches!(error, Error::MalformedSelector { .. }));
        assert!(error.to_string().contains("3 parts"));
    }
}
