//! Unified error type for chatkv.

use chatkv_protocol::ProtocolError;
use chatkv_room::RoomError;
use chatkv_store::StoreError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `chatkv` facade crate, you deal with this single error
/// type instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant auto-generates `From` impls, so the `?`
/// operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// A store-level error (connection, timeout, wrong key type).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A protocol-level error (encode, decode, bad timestamp).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A room-level error (unknown user, or a wrapped store/protocol error).
    #[error(transparent)]
    Room(#[from] RoomError),
}

impl ChatError {
    /// Returns `true` if this is a post by someone who is not in the room.
    ///
    /// Callers usually drop the post or tell the user, rather than treat it
    /// as a failure of the request.
    pub fn is_user_not_found(&self) -> bool {
        matches!(self, Self::Room(RoomError::UserNotFound { .. }))
    }
}

#[cfg(test)]
mod tests {
    use chatkv_store::Namespace;

    use super::*;

    #[test]
    fn test_from_store_error() {
        let err = StoreError::EmptyNamespace;
        let chat_err: ChatError = err.into();
        assert!(matches!(chat_err, ChatError::Store(_)));
        assert_eq!(chat_err.to_string(), "namespace must not be empty");
    }

    #[test]
    fn test_from_protocol_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let chat_err: ChatError = ProtocolError::Decode(source).into();
        assert!(matches!(chat_err, ChatError::Protocol(_)));
        assert!(chat_err.to_string().starts_with("decode failed"));
    }

    #[test]
    fn test_from_room_error() {
        let err = RoomError::UserNotFound {
            nickname: "bob".into(),
            room: Namespace::new("test2").unwrap(),
        };
        let chat_err: ChatError = err.into();
        assert!(chat_err.is_user_not_found());
        assert!(chat_err.to_string().contains("bob"));
    }

    #[test]
    fn test_store_error_inside_room_is_not_user_not_found() {
        let chat_err: ChatError = RoomError::Store(StoreError::EmptyNamespace).into();
        assert!(!chat_err.is_user_not_found());
    }
}
