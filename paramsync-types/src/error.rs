//! Error types for parameter synchronization.

use thiserror::Error;

/// Result type for parameter operations.
pub type ParamResult<T> = Result<T, ParamError>;

/// Errors that can occur while reading or writing a parameter.
///
/// A missing stack entry is deliberately absent from this list: it degrades
/// to local state and is only logged.
#[derive(Debug, Error)]
pub enum ParamError {
    /// A typed stack value could not be decoded into the requested type.
    #[error("failed to decode parameter `{name}`: {source}")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for the navigator.
    #[error("serialization error: {0}")]
    Encode(#[from] serde_json::Error),

    /// A value has no raw query representation (e.g. a nested object).
    #[error("unsupported value for parameter `{name}`: {reason}")]
    UnsupportedValue { name: String, reason: String },

    /// The web platform was selected but no URL router was supplied.
    #[error("no URL router available on the web platform")]
    RouterUnavailable,
}
