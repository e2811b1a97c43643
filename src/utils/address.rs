//! Backend address classification.
//!
//! Backend addresses in the service configuration and in the generator
//! options carry their protocol in the URI scheme (`grpc://backend:8081`,
//! `https://backend.run.app`). This module parses that scheme and answers
//! the one question the generator cares about: does the address require
//! gRPC support in the generated proxy configuration?

use std::borrow::Cow;

use url::Url;

/// Transport protocol declared by a backend address scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendProtocol {
    /// `http` or `https`
    Http1,
    /// `grpc` or `grpcs`
    Grpc,
}

/// Address-level failures surfaced while classifying a backend address.
///
/// Callers wrap these into [`crate::Error::AddressParse`] together with the
/// backend rule selector the address came from.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    /// The address is not a parseable URI.
    #[error("Invalid address {address:?}: {source}")]
    Invalid {
        address: String,
        #[source]
        source: url::ParseError,
    },

    /// The address parsed but does not contain a host.
    #[error("Address {0:?} does not contain a host")]
    MissingHost(String),

    /// The scheme is none of the supported backend schemes.
    #[error("Unknown backend scheme {scheme:?}, expected one of \"http(s)\" or \"grpc(s)\"")]
    UnknownScheme { scheme: String },
}

/// Parse a backend address into its protocol and TLS flag.
///
/// Scheme-less addresses (`backend:8080`) are treated as TLS HTTP, matching
/// the deployment convention for bare host:port backends.
pub fn parse_backend_address(address: &str) -> Result<(BackendProtocol, bool), AddressError> {
    let normalized = if address.contains("://") {
        Cow::Borrowed(address)
    } else {
        Cow::Owned(format!("https://{}", address))
    };

    let url = Url::parse(&normalized)
        .map_err(|source| AddressError::Invalid { address: address.to_string(), source })?;

    if url.host_str().map_or(true, |host| host.is_empty()) {
        return Err(AddressError::MissingHost(address.to_string()));
    }

    // `Url` lowercases the scheme during parsing.
    match url.scheme() {
        "http" => Ok((BackendProtocol::Http1, false)),
        "https" => Ok((BackendProtocol::Http1, true)),
        "grpc" => Ok((BackendProtocol::Grpc, false)),
        "grpcs" => Ok((BackendProtocol::Grpc, true)),
        other => Err(AddressError::UnknownScheme { scheme: other.to_string() }),
    }
}

/// Whether the address requires gRPC support in the generated configuration.
pub fn is_backend_grpc(address: &str) -> Result<bool, AddressError> {
    parse_backend_address(address).map(|(protocol, _)| protocol == BackendProtocol::Grpc)
}
