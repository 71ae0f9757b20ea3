//! Append-only message log for one room.

use chatkv_protocol::{decode_message, encode_message, Codec, JsonCodec, Message};
use chatkv_store::{Database, Store};

use crate::RoomError;

/// Logical key of the log's list within a room's namespace.
pub const MESSAGES_KEY: &str = "messages";

/// Ordered history of a room, stored as a list of encoded envelopes.
///
/// This is a live view: every call goes to the store, so two handles over
/// the same namespace always agree. Order is the order in which appends
/// reached the store. Entries are never edited or removed one at a time;
/// [`clear`](Self::clear) drops them all.
///
/// Indices follow list-store conventions: negative values count from the
/// tail, and range bounds past the end are clamped.
pub struct MessageLog<S: Store, C: Codec = JsonCodec> {
    db: Database<S>,
    codec: C,
}

impl<S: Store, C: Codec + Clone> Clone for MessageLog<S, C> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            codec: self.codec.clone(),
        }
    }
}

impl<S: Store, C: Codec> MessageLog<S, C> {
    /// Creates a log over the namespace `db` is scoped to.
    pub fn new(db: Database<S>, codec: C) -> Self {
        Self { db, codec }
    }

    /// Appends a message to the tail. Returns the new length.
    ///
    /// No deduplication: appending the same message twice stores it twice.
    pub async fn append(&self, message: &Message) -> Result<usize, RoomError> {
        let bytes = encode_message(&self.codec, message)?;
        let len = self.db.list_push(MESSAGES_KEY, &bytes).await?;
        tracing::debug!(
            room = %self.db.namespace(),
            nickname = %message.nickname,
            len,
            "message appended"
        );
        Ok(len)
    }

    /// Returns the message at `index`, or `None` if out of range.
    pub async fn at(&self, index: isize) -> Result<Option<Message>, RoomError> {
        match self.db.list_index(MESSAGES_KEY, index).await? {
            Some(bytes) => Ok(Some(decode_message(&self.codec, &bytes)?)),
            None => Ok(None),
        }
    }

    /// Returns messages from `start` to `end`, both inclusive, in log order.
    ///
    /// `end = -1` means "through the last message".
    pub async fn range(&self, start: isize, end: isize) -> Result<Vec<Message>, RoomError> {
        self.db
            .list_range(MESSAGES_KEY, start, end)
            .await?
            .iter()
            .map(|bytes| decode_message(&self.codec, bytes).map_err(RoomError::from))
            .collect()
    }

    /// Number of stored messages.
    pub async fn len(&self) -> Result<usize, RoomError> {
        Ok(self.db.list_len(MESSAGES_KEY).await?)
    }

    pub async fn is_empty(&self) -> Result<bool, RoomError> {
        Ok(self.len().await? == 0)
    }

    /// Deletes the whole history. Irreversible.
    pub async fn clear(&self) -> Result<(), RoomError> {
        let existed = self.db.delete(MESSAGES_KEY).await?;
        tracing::info!(room = %self.db.namespace(), existed, "message log cleared");
        Ok(())
    }

    /// Iterates over the whole history.
    ///
    /// This is `range(0, -1)` decoded up front: the full log is read into
    /// memory on every call, with no paging. Large rooms pay for that.
    pub async fn iter(&self) -> Result<std::vec::IntoIter<Message>, RoomError> {
        Ok(self.range(0, -1).await?.into_iter())
    }
}
