//! Error types for the protocol layer.
//!
//! Each chatkv crate defines its own error enum. A `ProtocolError` means
//! the problem is in serialization or in the shape of a stored record,
//! not in the store connection or in room rules.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a record into bytes).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning bytes into a record).
    ///
    /// Common causes: malformed JSON, an unknown `type` discriminator, or
    /// a `data` array with the wrong number of fields.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The record decoded, but its timestamp is not valid RFC 3339.
    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
