//! Chat rooms for chatkv.
//!
//! Each room is a membership set plus an append-only message log, both
//! kept in the shared store under the room's namespace. Handles are
//! stateless and cheap; build one per request.
//!
//! # Key types
//!
//! - [`RoomDirectory`]: opens room handles over a shared store
//! - [`Room`]: join/leave/members and posting messages
//! - [`MessageLog`]: ordered, append-only history of one room
//! - [`RoomError`]: what can go wrong, including [`RoomError::UserNotFound`]

mod directory;
mod error;
mod log;
mod room;

pub use directory::RoomDirectory;
pub use error::RoomError;
pub use log::{MessageLog, MESSAGES_KEY};
pub use room::{Room, MEMBERS_KEY};
