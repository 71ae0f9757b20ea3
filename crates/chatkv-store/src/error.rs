/// Errors that can occur in the store layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The Redis client reported a failure (connection, timeout, protocol).
    #[cfg(feature = "redis")]
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// A set verb was used on a list key, or a list verb on a set key.
    #[error("wrong type of value stored at key {key}")]
    WrongType { key: String },

    /// A namespace must contain at least one character.
    #[error("namespace must not be empty")]
    EmptyNamespace,
}
