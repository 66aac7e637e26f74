//! Pizza List Core
//!
//! Layered architecture:
//! - domain: entities, identifiers and errors
//! - repository: key-value slot stores and the snapshot codec
//! - list_store: the in-memory list mirrored to one storage slot

pub mod config;
pub mod domain;
pub mod repository;

mod change;
mod list_store;

pub use change::Change;
pub use config::StoreConfig;
pub use domain::{DomainError, DomainResult, Item, ItemId, SubItem, SubItemId};
pub use list_store::ListStore;
pub use repository::{BrowserStorage, FileStorage, KeyValueStore, MemoryStorage};
