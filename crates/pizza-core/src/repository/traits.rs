//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for the key-value slot store.
//! Implementations can use browser localStorage, files, in-memory, etc.

use crate::domain::DomainResult;

/// String slots addressed by key
///
/// All operations are synchronous; the browser backend never blocks.
pub trait KeyValueStore {
    /// Read a slot, `None` when it was never written
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Overwrite a slot
    fn set(&mut self, key: &str, value: &str) -> DomainResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set(key, value)
    }
}
