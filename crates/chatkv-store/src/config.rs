//! Store connection settings.

use serde::{Deserialize, Serialize};

use crate::DEFAULT_KEY_PREFIX;

/// Environment variable overriding [`StoreConfig::url`].
pub const URL_ENV: &str = "CHATKV_REDIS_URL";

/// Environment variable overriding [`StoreConfig::key_prefix`].
pub const KEY_PREFIX_ENV: &str = "CHATKV_KEY_PREFIX";

/// Where the store lives and how its keys are prefixed.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// partial config document is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Redis connection URL.
    pub url: String,

    /// First segment of every key (`<prefix>:<namespace>:<key>`).
    pub key_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

impl StoreConfig {
    /// Defaults, overridden by `CHATKV_REDIS_URL` and `CHATKV_KEY_PREFIX`
    /// when those are set.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(URL_ENV) {
            self.url = url;
        }
        if let Some(prefix) = lookup(KEY_PREFIX_ENV) {
            self.key_prefix = prefix;
        }
        self
    }
}
