//! Redis [`Store`] backend.

use redis::{aio::ConnectionManager, AsyncCommands, Client};

use crate::{Store, StoreError};

/// Redis-backed store.
///
/// Holds a [`ConnectionManager`], which reconnects on its own and is cheap
/// to clone; each call clones it and issues exactly one command. Timeouts
/// and retries are whatever the Redis client is configured with.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis.
    ///
    /// # Arguments
    /// * `url` - Redis connection URL (e.g., redis://localhost:6379)
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client = Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;

        tracing::info!(url = %url, "connected to redis");

        Ok(Self { conn })
    }

    /// Wraps an existing connection manager.
    pub fn from_connection(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

impl Store for RedisStore {
    async fn set_add(&self, key: &str, member: &str) -> Result<bool, StoreError> {
        let mut conn = self.conn.clone();
        let added: usize = conn.sadd(key, member).await?;
        Ok(added > 0)
    }

    async fn set_remove(&self, key: &str, member: &str) -> Result<bool, StoreError> {
        let mut conn = self.conn.clone();
        let removed: usize = conn.srem(key, member).await?;
        Ok(removed > 0)
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let mut conn = self.conn.clone();
        Ok(conn.smembers(key).await?)
    }

    async fn set_is_member(&self, key: &str, member: &str) -> Result<bool, StoreError> {
        let mut conn = self.conn.clone();
        Ok(conn.sismember(key, member).await?)
    }

    async fn list_push(&self, key: &str, value: &[u8]) -> Result<usize, StoreError> {
        let mut conn = self.conn.clone();
        Ok(conn.rpush(key, value).await?)
    }

    async fn list_index(&self, key: &str, index: isize) -> Result<Option<Vec<u8>>, StoreError> {
        let mut conn = self.conn.clone();
        Ok(conn.lindex(key, index).await?)
    }

    async fn list_range(
        &self,
        key: &str,
        start: isize,
        stop: isize,
    ) -> Result<Vec<Vec<u8>>, StoreError> {
        let mut conn = self.conn.clone();
        Ok(conn.lrange(key, start, stop).await?)
    }

    async fn list_len(&self, key: &str) -> Result<usize, StoreError> {
        let mut conn = self.conn.clone();
        Ok(conn.llen(key).await?)
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let mut conn = self.conn.clone();
        let deleted: usize = conn.del(key).await?;
        Ok(deleted > 0)
    }
}
