//! Codec trait and implementations for serializing/deserializing records.
//!
//! A "codec" (coder/decoder) converts between Rust types and raw bytes.
//! The message log doesn't care HOW records are serialized; it just needs
//! something that implements the [`Codec`] trait.
//!
//! Currently we provide [`JsonCodec`], which produces the
//! `{"type": ..., "data": [...]}` envelope stored in each log entry.

use serde::{de::DeserializeOwned, Serialize};

use crate::{Message, ProtocolError, Record};

/// A codec that can encode Rust types to bytes and decode bytes back.
///
/// `Send + Sync + 'static` lets one codec value be shared by every room
/// handle, across tasks.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed,
    /// incomplete, or don't match the expected type.
    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError>;
}

/// Encodes a message as its tagged envelope.
pub fn encode_message<C: Codec>(
    codec: &C,
    message: &Message,
) -> Result<Vec<u8>, ProtocolError> {
    codec.encode(&message.to_record())
}

/// Decodes an envelope, dispatches on its discriminator, and rebuilds the
/// message.
pub fn decode_message<C: Codec>(
    codec: &C,
    data: &[u8],
) -> Result<Message, ProtocolError> {
    let record: Record = codec.decode(data)?;
    Message::try_from(record)
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// Stored entries stay human-readable, so `LRANGE Chat:lobby:messages 0 -1`
/// in `redis-cli` shows the actual history.
///
/// This is behind the `json` feature flag (enabled by default).
///
/// ## Example
///
/// ```rust
/// use chatkv_protocol::{decode_message, encode_message, JsonCodec, Message};
///
/// let message = Message::now("alice", "hello");
/// let bytes = encode_message(&JsonCodec, &message).unwrap();
/// let decoded = decode_message(&JsonCodec, &bytes).unwrap();
///
/// assert_eq!(decoded.nickname, "alice");
/// assert_eq!(decoded.created_at.timestamp(), message.created_at.timestamp());
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}
