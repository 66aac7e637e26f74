//! List Store
//!
//! Owns the in-memory list and the storage slot it is mirrored to. Every
//! mutation rewrites the full snapshot before returning.

use log::{debug, error, info};

use crate::change::Change;
use crate::config::StoreConfig;
use crate::domain::{position_of, DomainError, DomainResult, IdGenerator, Item, ItemId, NewItem, SubItem};
use crate::repository::{load_snapshot, save_snapshot, KeyValueStore};

pub struct ListStore<S: KeyValueStore> {
    storage: S,
    config: StoreConfig,
    items: Vec<Item>,
    ids: IdGenerator,
}

impl<S: KeyValueStore> ListStore<S> {
    /// Read whatever was last saved in the configured slot
    pub fn load(storage: S, config: StoreConfig) -> Self {
        Self::load_with_ids(storage, config, IdGenerator::new())
    }

    pub fn load_with_ids(storage: S, config: StoreConfig, mut ids: IdGenerator) -> Self {
        let items = load_snapshot(&storage, &config.storage_key);
        for item in &items {
            ids.observe(item.id.0);
            for child in &item.children {
                ids.observe(child.id.0);
            }
        }
        info!("[STORE] Loaded {} items from '{}'", items.len(), config.storage_key);

        Self {
            storage,
            config,
            items,
            ids,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Give the storage back, e.g. to load it again
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Write the full list to the slot
    pub fn save(&mut self) -> DomainResult<()> {
        save_snapshot(&mut self.storage, &self.config.storage_key, &self.items)
    }

    // Write failures are logged; the in-memory change stands.
    fn persist(&mut self) {
        if let Err(e) = self.save() {
            error!("[STORE] Failed to persist {} items: {}", self.items.len(), e);
        }
    }

    /// Append a new item; too-short fields make this a silent no-op
    pub fn add_item(&mut self, name: &str, description: &str) -> Option<Change> {
        if !NewItem::new(name, description).is_valid(&self.config) {
            debug!("[STORE] Skipping item with short name or description");
            return None;
        }

        let item = Item::new(self.ids.next_item_id(), name.to_string(), description.to_string());
        info!("[STORE] Added item {} '{}'", item.id, item.name);
        self.items.push(item.clone());
        self.persist();
        Some(Change::ItemAdded(item))
    }

    /// Append a trimmed sub-item to its parent; blank text is a silent no-op
    pub fn add_sub_item(&mut self, text: &str, parent_id: ItemId) -> DomainResult<Option<Change>> {
        let index = position_of(&self.items, parent_id)
            .ok_or_else(|| DomainError::NotFound(format!("item {}", parent_id)))?;

        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let sub_item = SubItem::new(self.ids.next_sub_item_id(), text.to_string());
        self.items[index].children.push(sub_item.clone());
        debug!("[STORE] Added sub-item {} to item {}", sub_item.id, parent_id);
        self.persist();
        Ok(Some(Change::SubItemAdded { parent_id, sub_item }))
    }

    /// Remove an item together with its sub-items
    pub fn remove_item(&mut self, item_id: ItemId) -> DomainResult<Change> {
        let index = position_of(&self.items, item_id)
            .ok_or_else(|| DomainError::NotFound(format!("item {}", item_id)))?;

        let removed = self.items.remove(index);
        info!("[STORE] Removed item {} with {} sub-items", item_id, removed.children.len());
        self.persist();
        Ok(Change::ItemRemoved(item_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStorage;

    fn empty_store() -> ListStore<MemoryStorage> {
        ListStore::load(MemoryStorage::new(), StoreConfig::default())
    }

    fn ids(store: &ListStore<MemoryStorage>) -> Vec<ItemId> {
        store.items().iter().map(|item| item.id).collect()
    }

    fn snapshot(store: &ListStore<MemoryStorage>) -> Option<String> {
        store.storage.get(&store.config.storage_key).unwrap()
    }

    #[test]
    fn test_items_keep_creation_order() {
        let mut store = empty_store();
        store.add_item("Margherita", "classic").unwrap();
        store.add_item("Marinara", "no cheese").unwrap();

        let names: Vec<&str> = store.items().iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Margherita", "Marinara"]);
    }

    #[test]
    fn test_short_fields_are_ignored() {
        let mut store = empty_store();

        assert!(store.add_item("ab", "valid desc").is_none());
        assert!(store.add_item("abc", "ab").is_none());
        assert!(store.is_empty());
        assert_eq!(snapshot(&store), None);

        assert!(store.add_item("abc", "xyz").is_some());
        assert_eq!(store.len(), 1);

        assert!(store.add_item("🍕a", "🍕a").is_some());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_sub_item_text_is_trimmed() {
        let mut store = empty_store();
        let Some(Change::ItemAdded(item)) = store.add_item("Margherita", "classic") else {
            panic!("item not added");
        };

        assert_eq!(store.add_sub_item("   ", item.id).unwrap(), None);
        assert!(store.get(item.id).unwrap().children.is_empty());

        store.add_sub_item("  salt ", item.id).unwrap().unwrap();
        let children = &store.get(item.id).unwrap().children;
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].text, "salt");
    }

    #[test]
    fn test_remove_keeps_neighbours() {
        let mut store = empty_store();
        store.add_item("Aaa", "first").unwrap();
        store.add_item("Bbb", "second").unwrap();
        store.add_item("Ccc", "third").unwrap();
        let order = ids(&store);
        let (a, b, c) = (order[0], order[1], order[2]);
        store.add_sub_item("basil", a).unwrap();
        store.add_sub_item("olive", c).unwrap();
        store.add_sub_item("chili", c).unwrap();

        let change = store.remove_item(b).unwrap();
        assert_eq!(change, Change::ItemRemoved(b));
        assert_eq!(ids(&store), vec![a, c]);
        assert_eq!(store.get(a).unwrap().children.len(), 1);
        assert_eq!(store.get(c).unwrap().children.len(), 2);
    }

    #[test]
    fn test_reload_restores_items_and_sub_items() {
        let mut store = empty_store();
        let Some(Change::ItemAdded(item)) = store.add_item("Margherita", "classic") else {
            panic!("item not added");
        };
        store.add_sub_item("basil", item.id).unwrap();

        let reloaded = ListStore::load(store.into_storage(), StoreConfig::default());
        assert_eq!(reloaded.len(), 1);
        let margherita = &reloaded.items()[0];
        assert_eq!(margherita.name, "Margherita");
        assert_eq!(margherita.children.len(), 1);
        assert_eq!(margherita.children[0].text, "basil");
    }

    #[test]
    fn test_storage_matches_memory_after_each_mutation() {
        let mut store = empty_store();
        let Some(Change::ItemAdded(item)) = store.add_item("Funghi", "mushrooms") else {
            panic!("item not added");
        };
        let expected = serde_json::to_string(store.items()).unwrap();
        assert_eq!(snapshot(&store), Some(expected));

        store.add_sub_item("champignon", item.id).unwrap();
        let expected = serde_json::to_string(store.items()).unwrap();
        assert_eq!(snapshot(&store), Some(expected));

        store.remove_item(item.id).unwrap();
        assert_eq!(snapshot(&store).as_deref(), Some("[]"));
    }

    #[test]
    fn test_unknown_parent_is_not_found() {
        let mut store = empty_store();
        store.add_item("Margherita", "classic").unwrap();
        let before = snapshot(&store);

        let err = store.add_sub_item("basil", ItemId(42)).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        let err = store.remove_item(ItemId(42)).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));

        assert_eq!(store.len(), 1);
        assert_eq!(snapshot(&store), before);
    }

    #[test]
    fn test_unknown_parent_checked_before_blank_text() {
        let mut store = empty_store();
        assert!(store.add_sub_item("   ", ItemId(1)).is_err());
    }

    #[test]
    fn test_new_ids_follow_loaded_ids() {
        fn frozen_clock() -> u64 {
            5
        }

        let mut storage = MemoryStorage::new();
        storage
            .set("pizzaStorage", r#"[{"id":10,"name":"Old","description":"legacy","children":[{"id":20,"text":"ham"}]}]"#)
            .unwrap();

        let mut store = ListStore::load_with_ids(storage, StoreConfig::default(), IdGenerator::with_clock(frozen_clock));
        let Some(Change::ItemAdded(item)) = store.add_item("New", "fresh") else {
            panic!("item not added");
        };
        assert_eq!(item.id, ItemId(21));

        let Some(Change::ItemAdded(next)) = store.add_item("Newer", "fresher") else {
            panic!("item not added");
        };
        assert_ne!(next.id, item.id);
    }

    #[test]
    fn test_changes_replay_onto_mirror() {
        let mut store = empty_store();
        let mut mirror: Vec<Item> = store.items().to_vec();

        let mut changes = Vec::new();
        changes.extend(store.add_item("Margherita", "classic"));
        changes.extend(store.add_item("Marinara", "no cheese"));
        changes.extend(store.add_item("x", "too short"));
        let first = store.items()[0].id;
        let second = store.items()[1].id;
        changes.extend(store.add_sub_item("basil", first).unwrap());
        changes.extend(store.add_sub_item("  ", first).unwrap());
        changes.extend(store.add_sub_item("garlic", second).unwrap());
        changes.push(store.remove_item(first).unwrap());

        assert_eq!(changes.len(), 5);
        for change in &changes {
            change.apply_to(&mut mirror);
        }
        assert_eq!(mirror, store.items());
    }

    #[test]
    fn test_custom_storage_key() {
        let config = StoreConfig::default().with_storage_key("pizzas-test");
        let mut store = ListStore::load(MemoryStorage::new(), config);
        assert_eq!(store.config().storage_key, "pizzas-test");
        store.add_item("Margherita", "classic").unwrap();

        let storage = store.into_storage();
        assert!(storage.get("pizzas-test").unwrap().is_some());
        assert!(storage.get("pizzaStorage").unwrap().is_none());
    }

    struct ReadOnlyStorage;

    impl KeyValueStore for ReadOnlyStorage {
        fn get(&self, _key: &str) -> DomainResult<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> DomainResult<()> {
            Err(DomainError::Storage(format!("quota exceeded writing '{}'", key)))
        }
    }

    #[test]
    fn test_write_failure_keeps_change() {
        let mut store = ListStore::load(ReadOnlyStorage, StoreConfig::default());
        assert!(store.add_item("Margherita", "classic").is_some());
        assert_eq!(store.len(), 1);
        assert!(store.save().is_err());
    }
}
