//! In-memory slot store
//!
//! Used by tests and as the session-only fallback when the browser refuses
//! access to localStorage.

use std::collections::HashMap;

use super::traits::KeyValueStore;
use crate::domain::DomainResult;

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
