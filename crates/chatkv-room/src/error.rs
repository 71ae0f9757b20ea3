//! Error types for the room layer.

use chatkv_protocol::ProtocolError;
use chatkv_store::{Namespace, StoreError};

/// Errors that can occur during room operations.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// `say` was called by a nickname that is not a member. The log is
    /// left unchanged.
    #[error("user {nickname} not found in room {room}")]
    UserNotFound { nickname: String, room: Namespace },

    /// The store call failed (connection, timeout, wrong key type).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A log entry could not be encoded or decoded.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
