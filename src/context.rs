//! Application Context
//!
//! Binds the list store to the view mirror, provided via Leptos Context API.
//! Each operation mutates the store (which persists) and mirrors the change
//! before returning.

use leptos::prelude::*;
use pizza_core::{Change, DomainResult, ItemId, KeyValueStore, ListStore};

use crate::store::{store_apply, BoardStore};

pub type PizzaStore = ListStore<Box<dyn KeyValueStore>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The list store; its browser storage is `!Send`, so it stays local
    list: StoredValue<PizzaStore, LocalStorage>,
    /// Reactive mirror the components render from
    pub board: BoardStore,
}

impl AppContext {
    pub fn new(list: PizzaStore, board: BoardStore) -> Self {
        Self {
            list: StoredValue::new_local(list),
            board,
        }
    }

    /// Add a pizza; returns whether it passed the form gate
    pub fn add_item(&self, name: &str, description: &str) -> bool {
        let change = self.list.try_update_value(|list| list.add_item(name, description));
        self.mirror(change.flatten())
    }

    /// Add an ingredient; returns whether a row was added
    pub fn add_sub_item(&self, text: &str, parent_id: ItemId) -> bool {
        let result = self.list.try_update_value(|list| list.add_sub_item(text, parent_id));
        self.mirror(self.swallow(result))
    }

    /// Remove a pizza and detach its block
    pub fn remove_item(&self, item_id: ItemId) {
        let result = self
            .list
            .try_update_value(|list| list.remove_item(item_id).map(Some));
        self.mirror(self.swallow(result));
    }

    fn mirror(&self, change: Option<Change>) -> bool {
        match change {
            Some(change) => {
                store_apply(&self.board, &change);
                true
            }
            None => false,
        }
    }

    // Lookup failures stop here: state is unchanged and the user sees nothing.
    fn swallow(&self, result: Option<DomainResult<Option<Change>>>) -> Option<Change> {
        match result {
            Some(Ok(change)) => change,
            Some(Err(e)) => {
                log::warn!("[APP] Ignoring action: {}", e);
                None
            }
            None => {
                log::error!("[APP] List store is no longer available");
                None
            }
        }
    }
}
