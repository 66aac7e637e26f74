//! Browser localStorage slot store

use super::traits::KeyValueStore;
use crate::domain::{DomainError, DomainResult};

/// `window.localStorage`
///
/// Holds a JS handle, so it is `!Send` and must stay on the UI thread.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> DomainResult<Self> {
        let window = web_sys::window().ok_or_else(|| DomainError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| DomainError::Storage(format!("localStorage denied: {:?}", e)))?
            .ok_or_else(|| DomainError::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| DomainError::Storage(format!("read '{}': {:?}", key, e)))
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| DomainError::Storage(format!("write '{}': {:?}", key, e)))
    }
}
