//! Store Configuration

use serde::{Deserialize, Serialize};

/// Storage slot used by every earlier version of the list
pub const DEFAULT_STORAGE_KEY: &str = "pizzaStorage";

/// Minimum length of the name and description fields
pub const DEFAULT_MIN_FIELD_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Key of the single slot holding the JSON snapshot
    pub storage_key: String,
    /// Minimum character count for new item fields
    pub min_field_len: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            min_field_len: DEFAULT_MIN_FIELD_LEN,
        }
    }
}

impl StoreConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
