//! Namespaced key-value storage for chatkv.
//!
//! Provides the [`Store`] trait, a fixed catalog of set and list
//! primitives, and the [`Database`] accessor that scopes every key to one
//! room's namespace.
//!
//! # How it fits in the stack
//!
//! ```text
//! Room Layer (above)   ← membership set + message log
//!     ↕
//! Database (this crate) ← rewrites logical keys to prefix:namespace:key
//!     ↕
//! Store backend         ← Redis, or in-process memory
//! ```
//!
//! # Feature Flags
//!
//! - `redis` (default): [`RedisStore`] via the `redis` crate

#![allow(async_fn_in_trait)]

mod config;
mod database;
mod error;
mod memory;
#[cfg(feature = "redis")]
mod redis_store;

pub use config::{StoreConfig, KEY_PREFIX_ENV, URL_ENV};
pub use database::{Database, DEFAULT_KEY_PREFIX, KEY_DELIMITER};
pub use error::StoreError;
pub use memory::MemoryStore;
#[cfg(feature = "redis")]
pub use redis_store::RedisStore;

use std::fmt;

/// Identifies one room's slice of the shared store.
///
/// Two accessors built with equal namespaces (and the same prefix) address
/// identical keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// Creates a namespace, rejecting the empty string.
    ///
    /// No other validation happens here: characters such as `:` are
    /// accepted as-is.
    pub fn new(name: impl Into<String>) -> Result<Self, StoreError> {
        let name = name.into();
        if name.is_empty() {
            return Err(StoreError::EmptyNamespace);
        }
        Ok(Self(name))
    }

    /// Returns the namespace as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The primitives a backend must provide, addressed by fully-qualified key.
///
/// This is the complete catalog: callers cannot reach any other command of
/// the underlying store. Every method is a single round trip with no local
/// caching, and each is atomic on its own. Nothing here spans calls.
///
/// List indices follow Redis conventions: negative values count from the
/// tail (`-1` is the last element) and range bounds past either end are
/// clamped rather than rejected.
pub trait Store: Send + Sync + 'static {
    /// Adds `member` to the set at `key`. Returns `true` if it was not
    /// already present.
    async fn set_add(&self, key: &str, member: &str) -> Result<bool, StoreError>;

    /// Removes `member` from the set at `key`. Returns `true` if it was
    /// present.
    async fn set_remove(&self, key: &str, member: &str) -> Result<bool, StoreError>;

    /// Returns every member of the set at `key`, in no particular order.
    async fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError>;

    /// Returns `true` if `member` belongs to the set at `key`.
    async fn set_is_member(&self, key: &str, member: &str) -> Result<bool, StoreError>;

    /// Appends `value` to the tail of the list at `key`, returning the new
    /// length.
    async fn list_push(&self, key: &str, value: &[u8]) -> Result<usize, StoreError>;

    /// Returns the element at `index`, or `None` if out of range.
    async fn list_index(&self, key: &str, index: isize) -> Result<Option<Vec<u8>>, StoreError>;

    /// Returns elements from `start` to `stop`, both inclusive.
    async fn list_range(
        &self,
        key: &str,
        start: isize,
        stop: isize,
    ) -> Result<Vec<Vec<u8>>, StoreError>;

    /// Returns the length of the list at `key` (0 if absent).
    async fn list_len(&self, key: &str) -> Result<usize, StoreError>;

    /// Deletes `key` whatever it holds. Returns `true` if it existed.
    async fn delete(&self, key: &str) -> Result<bool, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_rejects_empty() {
        assert!(matches!(Namespace::new(""), Err(StoreError::EmptyNamespace)));
    }

    #[test]
    fn test_namespace_accepts_any_non_empty_string() {
        let ns = Namespace::new("lobby:east").unwrap();
        assert_eq!(ns.as_str(), "lobby:east");
        assert_eq!(ns.to_string(), "lobby:east");
    }

    #[test]
    fn test_namespace_equality() {
        assert_eq!(Namespace::new("a").unwrap(), Namespace::new("a").unwrap());
        assert_ne!(Namespace::new("a").unwrap(), Namespace::new("b").unwrap());
    }
}
