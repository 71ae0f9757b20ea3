//! A chat room: a membership set and a message log under one namespace.
//!
//! A `Room` is a handle, not an owner. All state lives in the store, so
//! building a second handle for the same name sees the same members and
//! history, and dropping a handle changes nothing.

use std::sync::Arc;

use chatkv_protocol::{Codec, JsonCodec, Message};
use chatkv_store::{Database, Namespace, Store};

use crate::{MessageLog, RoomError};

/// Logical key of the membership set within a room's namespace.
pub const MEMBERS_KEY: &str = "members";

/// Handle to one room's persisted state.
///
/// There is no separate existence record: a room appears the first time
/// anything is written under its namespace, and an empty room cannot be
/// told apart from one that was never used.
pub struct Room<S: Store, C: Codec = JsonCodec> {
    db: Database<S>,
    messages: MessageLog<S, C>,
}

impl<S: Store, C: Codec + Clone> Clone for Room<S, C> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            messages: self.messages.clone(),
        }
    }
}

impl<S: Store> Room<S> {
    /// Opens a room under the default key prefix with the JSON codec.
    pub fn new(store: Arc<S>, name: impl Into<String>) -> Result<Self, RoomError> {
        let namespace = Namespace::new(name)?;
        Ok(Self::open(Database::new(store, namespace), JsonCodec))
    }
}

impl<S: Store, C: Codec + Clone> Room<S, C> {
    /// Opens a room over an already scoped accessor.
    pub fn open(db: Database<S>, codec: C) -> Self {
        let messages = MessageLog::new(db.clone(), codec);
        Self { db, messages }
    }
}

impl<S: Store, C: Codec> Room<S, C> {
    /// The room's name (its namespace).
    pub fn name(&self) -> &Namespace {
        self.db.namespace()
    }

    // -- Members --

    /// Adds `nickname` to the room. Joining twice is harmless.
    ///
    /// Returns `true` if the nickname was not already a member.
    pub async fn join(&self, nickname: &str) -> Result<bool, RoomError> {
        let added = self.db.set_add(MEMBERS_KEY, nickname).await?;
        if added {
            tracing::info!(room = %self.name(), %nickname, "member joined");
        }
        Ok(added)
    }

    /// Removes `nickname` from the room. Leaving when absent is a no-op.
    ///
    /// Returns `true` if the nickname was a member.
    pub async fn leave(&self, nickname: &str) -> Result<bool, RoomError> {
        let removed = self.db.set_remove(MEMBERS_KEY, nickname).await?;
        if removed {
            tracing::info!(room = %self.name(), %nickname, "member left");
        }
        Ok(removed)
    }

    /// Current members, in no particular order.
    pub async fn members(&self) -> Result<Vec<String>, RoomError> {
        Ok(self.db.set_members(MEMBERS_KEY).await?)
    }

    pub async fn is_member(&self, nickname: &str) -> Result<bool, RoomError> {
        Ok(self.db.set_is_member(MEMBERS_KEY, nickname).await?)
    }

    // -- Messages --

    /// Posts `text` as `nickname`, stamped with the current time.
    ///
    /// Fails with [`RoomError::UserNotFound`] if `nickname` is not a
    /// member. The membership check and the append are two separate store
    /// calls: a member who leaves in between can still get a message in.
    pub async fn say(&self, nickname: &str, text: &str) -> Result<Message, RoomError> {
        if !self.is_member(nickname).await? {
            tracing::warn!(room = %self.name(), %nickname, "say rejected: not a member");
            return Err(RoomError::UserNotFound {
                nickname: nickname.to_string(),
                room: self.name().clone(),
            });
        }

        let message = Message::now(nickname, text);
        self.messages.append(&message).await?;
        Ok(message)
    }

    /// The room's message log. Reads through it hit the store, so it always
    /// reflects the latest appends.
    pub fn messages(&self) -> &MessageLog<S, C> {
        &self.messages
    }
}
