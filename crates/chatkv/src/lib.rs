//! # chatkv
//!
//! Chat room persistence on a shared key-value store.
//!
//! A room is a membership set and an append-only message log, both kept in
//! Redis under `Chat:<room>:members` and `Chat:<room>:messages`. Handles
//! hold no state of their own, so any number of processes can serve the
//! same rooms.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatkv::prelude::*;
//!
//! # async fn run() -> Result<(), ChatError> {
//! let rooms = chatkv::connect(&ChatConfig::from_env()).await?;
//! let room = rooms.room("lobby")?;
//!
//! room.join("alice").await?;
//! room.say("alice", "hello").await?;
//!
//! for message in room.messages().iter().await? {
//!     println!("{} {}: {}", message.created_at, message.nickname, message.text);
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
pub mod telemetry;

pub use config::ChatConfig;
pub use error::ChatError;

pub use chatkv_protocol as protocol;
pub use chatkv_room as room;
pub use chatkv_store as store;

#[cfg(feature = "redis")]
use std::sync::Arc;

#[cfg(feature = "redis")]
use chatkv_room::RoomDirectory;
#[cfg(feature = "redis")]
use chatkv_store::RedisStore;

/// Connects to the configured Redis and returns a directory of rooms
/// under the configured key prefix.
#[cfg(feature = "redis")]
pub async fn connect(config: &ChatConfig) -> Result<RoomDirectory<RedisStore>, ChatError> {
    let store = RedisStore::connect(&config.store.url).await?;
    tracing::info!(key_prefix = %config.store.key_prefix, "room directory ready");
    Ok(RoomDirectory::new(Arc::new(store)).key_prefix(config.store.key_prefix.clone()))
}

/// Common imports for working with rooms.
pub mod prelude {
    pub use crate::{ChatConfig, ChatError};
    pub use chatkv_protocol::{Codec, JsonCodec, Message};
    pub use chatkv_room::{MessageLog, Room, RoomDirectory, RoomError};
    pub use chatkv_store::{MemoryStore, Namespace, Store, StoreConfig};
    #[cfg(feature = "redis")]
    pub use chatkv_store::RedisStore;
}
