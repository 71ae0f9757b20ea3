//! Message records for chatkv.
//!
//! This crate defines what a chat message looks like at rest:
//!
//! - **Types** ([`Message`], [`Record`]): the in-memory message and the
//!   tagged envelope it is stored as.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how envelopes are
//!   converted to/from bytes.
//! - **Errors** ([`ProtocolError`]): what can go wrong during
//!   encoding/decoding.
//!
//! # Architecture
//!
//! The protocol layer sits between the store (raw bytes in a list) and the
//! room (typed messages). It doesn't know about keys or membership; it
//! only knows how to serialize and deserialize records.
//!
//! ```text
//! Store (bytes) → Protocol (Record) → Room (Message)
//! ```

mod codec;
mod error;
mod types;

pub use codec::{decode_message, encode_message, Codec};
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{Message, MessageFields, Record};
