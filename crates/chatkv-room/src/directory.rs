//! Room directory: hands out room handles over a shared store.

use std::sync::Arc;

use chatkv_protocol::{Codec, JsonCodec};
use chatkv_store::{Database, Namespace, Store, DEFAULT_KEY_PREFIX};

use crate::{Room, RoomError};

/// Entry point for room operations from higher layers (HTTP handlers,
/// background jobs).
///
/// Unlike an in-process registry, the directory remembers nothing about
/// the rooms it opens. [`room`](Self::room) builds a fresh handle on every
/// call, and whether a room "exists" is only a question of what the store
/// holds.
pub struct RoomDirectory<S: Store, C: Codec = JsonCodec> {
    store: Arc<S>,
    key_prefix: String,
    codec: C,
}

impl<S: Store, C: Codec + Clone> Clone for RoomDirectory<S, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            key_prefix: self.key_prefix.clone(),
            codec: self.codec.clone(),
        }
    }
}

impl<S: Store> RoomDirectory<S> {
    /// Creates a directory with the default key prefix and the JSON codec.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_codec(store, DEFAULT_KEY_PREFIX, JsonCodec)
    }
}

impl<S: Store, C: Codec + Clone> RoomDirectory<S, C> {
    /// Creates a directory with an explicit key prefix and codec.
    pub fn with_codec(store: Arc<S>, key_prefix: impl Into<String>, codec: C) -> Self {
        Self {
            store,
            key_prefix: key_prefix.into(),
            codec,
        }
    }

    /// Sets the key prefix shared by every room this directory opens.
    pub fn key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Opens a handle to the room called `name`.
    ///
    /// Nothing is written; the room springs into being on its first join
    /// or post. Fails only if `name` is empty.
    pub fn room(&self, name: impl Into<String>) -> Result<Room<S, C>, RoomError> {
        let namespace = Namespace::new(name)?;
        let db = Database::with_prefix(Arc::clone(&self.store), self.key_prefix.clone(), namespace);
        Ok(Room::open(db, self.codec.clone()))
    }

    /// Returns the shared store handle.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}
