//! Item Entity
//!
//! A pizza (item) owns an ordered list of ingredients (sub-items).
//! Insertion order is display order for both.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::config::StoreConfig;

/// Identifier of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

/// Identifier of a sub-item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SubItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, described list entry
///
/// Older snapshots used `descText` and `ingredients`; both are still read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Display name (heading)
    #[serde(default)]
    pub name: String,
    /// Free-text description
    #[serde(default, alias = "descText")]
    pub description: String,
    /// Owned sub-items in insertion order
    #[serde(default, alias = "ingredients")]
    pub children: Vec<SubItem>,
}

impl Item {
    /// Create a new item with no children
    pub fn new(id: ItemId, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
            children: Vec::new(),
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A child text entry owned by exactly one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItem {
    pub id: SubItemId,
    #[serde(alias = "myIngredients")]
    pub text: String,
}

impl SubItem {
    pub fn new(id: SubItemId, text: String) -> Self {
        Self { id, text }
    }
}

impl Entity for SubItem {
    type Id = SubItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Raw form input for a new item
#[derive(Debug, Clone, Copy)]
pub struct NewItem<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> NewItem<'a> {
    pub fn new(name: &'a str, description: &'a str) -> Self {
        Self { name, description }
    }

    /// Both fields must reach the minimum length, counted in UTF-16 code
    /// units on the untrimmed value (the length a browser input reports)
    pub fn is_valid(&self, config: &StoreConfig) -> bool {
        self.name.encode_utf16().count() >= config.min_field_len
            && self.description.encode_utf16().count() >= config.min_field_len
    }
}
