//! Snapshot persistence
//!
//! The whole list lives in one slot as a JSON array and is rewritten in full
//! on every save.

use log::{debug, warn};

use super::traits::KeyValueStore;
use crate::domain::{DomainResult, Item};

pub fn decode_snapshot(raw: &str) -> DomainResult<Vec<Item>> {
    Ok(serde_json::from_str(raw)?)
}

pub fn encode_snapshot(items: &[Item]) -> DomainResult<String> {
    Ok(serde_json::to_string(items)?)
}

/// Read the slot; a missing, unreadable or corrupt slot yields an empty list
pub fn load_snapshot<S: KeyValueStore + ?Sized>(storage: &S, key: &str) -> Vec<Item> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("[STORE] Slot '{}' is empty", key);
            return Vec::new();
        }
        Err(e) => {
            warn!("[STORE] Could not read slot '{}': {}", key, e);
            return Vec::new();
        }
    };

    match decode_snapshot(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!("[STORE] Ignoring unreadable snapshot in '{}': {}", key, e);
            Vec::new()
        }
    }
}

/// Overwrite the slot with the full list
pub fn save_snapshot<S: KeyValueStore + ?Sized>(storage: &mut S, key: &str, items: &[Item]) -> DomainResult<()> {
    let raw = encode_snapshot(items)?;
    storage.set(key, &raw)
}
