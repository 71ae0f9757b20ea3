//! Top-level configuration.

use chatkv_store::StoreConfig;
use serde::{Deserialize, Serialize};

/// Everything needed to wire chatkv to a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Store location and key prefix.
    pub store: StoreConfig,
}

impl ChatConfig {
    /// Defaults overridden from the environment (see [`StoreConfig::from_env`]).
    pub fn from_env() -> Self {
        Self {
            store: StoreConfig::from_env(),
        }
    }
}
