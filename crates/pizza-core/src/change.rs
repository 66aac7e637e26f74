//! Store Changes
//!
//! Every successful mutation reports one `Change`. The view mirror applies
//! it in the same call, which keeps one block per item and one row per
//! sub-item without any diffing pass.

use crate::domain::{position_of, Item, ItemId, SubItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Append a new block at the end of the list
    ItemAdded(Item),
    /// Append one row to the parent's sub-container
    SubItemAdded { parent_id: ItemId, sub_item: SubItem },
    /// Detach the item's block
    ItemRemoved(ItemId),
}

impl Change {
    pub fn apply_to(&self, items: &mut Vec<Item>) {
        match self {
            Change::ItemAdded(item) => items.push(item.clone()),
            Change::SubItemAdded { parent_id, sub_item } => {
                if let Some(parent) = items.iter_mut().find(|item| item.id == *parent_id) {
                    parent.children.push(sub_item.clone());
                }
            }
            Change::ItemRemoved(id) => {
                if let Some(index) = position_of(items, *id) {
                    items.remove(index);
                }
            }
        }
    }
}
