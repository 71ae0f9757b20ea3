//! Core record types for chatkv's storage format.
//!
//! [`Message`] is what rooms hand out. [`Record`] is what actually sits in
//! the store: a tagged envelope whose `type` field says which kind of
//! record the positional `data` array holds.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Who said it. Passed through exactly as supplied by the caller.
    pub nickname: String,

    /// What was said.
    pub text: String,

    /// When it was said (wall clock, UTC).
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Creates a message with an explicit timestamp.
    pub fn new(
        nickname: impl Into<String>,
        text: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            nickname: nickname.into(),
            text: text.into(),
            created_at,
        }
    }

    /// Creates a message stamped with the current time.
    pub fn now(nickname: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(nickname, text, Utc::now())
    }

    /// Wraps this message in its storage envelope.
    ///
    /// The timestamp is written as RFC 3339 at whole-second precision, so
    /// a decoded message's `created_at` is this one's truncated to the
    /// second.
    pub fn to_record(&self) -> Record {
        Record::Message(MessageFields(
            self.nickname.clone(),
            self.text.clone(),
            self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        ))
    }
}

impl TryFrom<Record> for Message {
    type Error = ProtocolError;

    fn try_from(record: Record) -> Result<Self, Self::Error> {
        match record {
            Record::Message(MessageFields(nickname, text, created_at)) => {
                let parsed = DateTime::parse_from_rfc3339(&created_at)
                    .map_err(|source| ProtocolError::InvalidTimestamp {
                        value: created_at.clone(),
                        source,
                    })?;
                Ok(Self::new(nickname, text, parsed.with_timezone(&Utc)))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Record: the stored envelope
// ---------------------------------------------------------------------------

/// Positional fields of a stored message: `[nickname, text, created_at]`.
///
/// A tuple struct serializes as a JSON array, which is the shape the
/// envelope's `data` field carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageFields(pub String, pub String, pub String);

/// A stored record, discriminated by its `type` field.
///
/// `#[serde(tag = "type", content = "data")]` produces "adjacently tagged"
/// JSON:
///   `{ "type": "Message", "data": ["bob", "hi", "2026-10-19T08:30:00Z"] }`
///
/// Decoding reads `type` first and picks the matching variant, so a new
/// kind of record is a new variant here plus a conversion. An unknown
/// `type` fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Record {
    /// A chat message.
    Message(MessageFields),
}

// =========================================================================
// Tests
// =========================================================================
