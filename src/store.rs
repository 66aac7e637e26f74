//! View Mirror Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The mirror is
//! only ever changed through `store_apply`, one `Change` per mutation.

use leptos::prelude::*;
use pizza_core::{Change, Item, ItemId, SubItem};
use reactive_stores::Store;

/// What is currently rendered
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// One block per item, in display order
    pub items: Vec<Item>,
}

impl BoardState {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

// ========================
// Store Helper Functions
// ========================

/// Mirror one store change
pub fn store_apply(store: &BoardStore, change: &Change) {
    change.apply_to(&mut store.items().write());
}

/// Rows of one item's sub-container
pub fn store_children(store: &BoardStore, item_id: ItemId) -> Vec<SubItem> {
    store
        .items()
        .read()
        .iter()
        .find(|item| item.id == item_id)
        .map(|item| item.children.clone())
        .unwrap_or_default()
}
