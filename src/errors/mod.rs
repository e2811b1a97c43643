//! # Error Handling
//!
//! Error types for the opflow configuration generator, defined with
//! `thiserror`. Every failure is returned to the caller; nothing in this
//! crate retries or swallows an error. Discovery-API suppression is not an
//! error (it is a logged skip), and absent optional fields in the service
//! configuration are valid states.

use crate::utils::address::AddressError;

/// Custom result type for opflow operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the configuration generator
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A CORS selector contains the reserved delimiter but does not split
    /// back into an API part and a method part. Selectors produced by this
    /// crate always decode cleanly, so this indicates a selector constructed
    /// outside the codec.
    #[error("Malformed CORS selector {selector:?}: {reason}")]
    MalformedSelector { selector: String, reason: String },

    /// A backend address could not be classified. `context` names the
    /// backend rule selector the address came from, or `"local"` for the
    /// local backend address in the generator options.
    #[error("Failed to parse backend address for {context:?}: {source}")]
    AddressParse {
        context: String,
        #[source]
        source: AddressError,
    },

    /// A filter payload could not be encoded into its typed envelope.
    #[error("Failed to encode config to Any for filter {filter:?}: {source}")]
    Serialization {
        filter: String,
        #[source]
        source: prost::EncodeError,
    },

    /// Configuration errors (unparseable option values and the like)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a malformed-selector error
    pub fn malformed_selector<S: Into<String>, R: Into<String>>(selector: S, reason: R) -> Self {
        Self::MalformedSelector { selector: selector.into(), reason: reason.into() }
    }

    /// Create an address-parse error for a backend rule selector or `"local"`
    pub fn address_parse<C: Into<String>>(context: C, source: AddressError) -> Self {
        Self::AddressParse { context: context.into(), source }
    }

    /// Create a serialization error for the named filter
    pub fn serialization<F: Into<String>>(filter: F, source: prost::EncodeError) -> Self {
        Self::Serialization { filter: filter.into(), source }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }
}
