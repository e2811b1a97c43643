//! # Filter envelope construction
//!
//! Builders that wrap typed protobuf filter configurations into the Envoy
//! `google.protobuf.Any` envelope and the surrounding filter registration,
//! for both the HTTP filter chain and the listener's network filter chain.
//! Callers pass the filter name and fully-qualified type URL; encoding
//! failures surface as [`Error::Serialization`] naming the filter.

use envoy_types::pb::envoy::config::listener::v3::filter::ConfigType as NetworkFilterConfigType;
use envoy_types::pb::envoy::config::listener::v3::Filter as NetworkFilter;
use envoy_types::pb::envoy::extensions::filters::network::http_connection_manager::v3::http_filter::ConfigType as HttpFilterConfigType;
use envoy_types::pb::envoy::extensions::filters::network::http_connection_manager::v3::HttpFilter;
use envoy_types::pb::google::protobuf::Any;
use prost::Message;

use crate::errors::{Error, Result};

/// Encode a protobuf message into an Envoy `Any` envelope under the given
/// type URL.
pub fn encode_any<M: Message>(
    type_url: impl Into<String>,
    config: &M,
) -> std::result::Result<Any, prost::EncodeError> {
    let mut value = Vec::with_capacity(config.encoded_len());
    config.encode(&mut value)?;
    Ok(Any { type_url: type_url.into(), value })
}

/// Wrap a typed configuration into an HTTP filter registration.
///
/// The filter is registered as required and enabled; callers that need an
/// optional or disabled filter flip the flags on the returned value.
pub fn http_filter<M: Message>(
    name: impl Into<String>,
    type_url: impl Into<String>,
    config: &M,
) -> Result<HttpFilter> {
    let name = name.into();
    let any =
        encode_any(type_url, config).map_err(|source| Error::serialization(&name, source))?;
    Ok(HttpFilter {
        name,
        config_type: Some(HttpFilterConfigType::TypedConfig(any)),
        is_optional: false,
        disabled: false,
    })
}

/// Wrap a typed configuration into a listener network filter registration.
pub fn network_filter<M: Message>(
    name: impl Into<String>,
    type_url: impl Into<String>,
    config: &M,
) -> Result<NetworkFilter> {
    let name = name.into();
    let any =
        encode_any(type_url, config).map_err(|source| Error::serialization(&name, source))?;
    Ok(NetworkFilter { name, config_type: Some(NetworkFilterConfigType::TypedConfig(any)) })
}
