//! List Store
//!
//! Owns the canonical state (items, categories, theme flag). Every mutation
//! goes through a named operation here; each one that changes state writes
//! the full record through the storage port and then notifies subscribers.
//!
//! The in-memory state is the source of truth for the session. A failed
//! write is logged and kept in `last_persist_error`, never rolled back.

use std::collections::HashSet;

use log::{debug, error, info, warn};

use crate::config::StoreConfig;
use crate::domain::{position_of, Category, CategoryId, Item, ItemId, ListState};
use crate::error::{PersistError, ReorderError};
use crate::persistence::{decode_record, encode_record, StoragePort};
use crate::projection::{display_order, move_within};

/// Handle returned by `subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&ListState)>;

/// Observable, persisted shopping list state
pub struct ListStore<S: StoragePort> {
    state: ListState,
    storage: S,
    config: StoreConfig,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    last_persist_error: Option<PersistError>,
}

impl<S: StoragePort> ListStore<S> {
    /// Open with the default configuration
    pub fn new(storage: S) -> Self {
        Self::open(storage, StoreConfig::default())
    }

    /// Rehydrate from `storage` once. A missing or unreadable record yields
    /// an empty list with the seeded categories and light theme.
    pub fn open(storage: S, config: StoreConfig) -> Self {
        let state = rehydrate(&storage, &config);
        Self {
            state,
            storage,
            config,
            subscribers: Vec::new(),
            next_subscription: 0,
            last_persist_error: None,
        }
    }

    // ========================
    // Reads
    // ========================

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn snapshot(&self) -> ListState {
        self.state.clone()
    }

    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    pub fn categories(&self) -> &[Category] {
        &self.state.categories
    }

    pub fn is_dark_mode(&self) -> bool {
        self.state.is_dark_mode
    }

    /// Items in display order
    pub fn projection(&self) -> Vec<&Item> {
        display_order(&self.state.items)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Most recent failed write, cleared by the next successful one
    pub fn last_persist_error(&self) -> Option<&PersistError> {
        self.last_persist_error.as_ref()
    }

    /// Give the storage port back, dropping the in-memory state
    pub fn into_storage(self) -> S {
        self.storage
    }

    // ========================
    // Operations
    // ========================

    /// Add an item in front of every existing one
    ///
    /// Existing orders are shifted up by one and the new item takes 0, or
    /// the old minimum when rehydrated orders went below zero, so it always
    /// ranks strictly lowest. Names are trimmed; an empty name is ignored
    /// and returns `None`.
    pub fn add_item(&mut self, name: &str, category_id: impl Into<CategoryId>) -> Option<ItemId> {
        let name = name.trim();
        if name.is_empty() {
            debug!("[STORE] add_item ignored: empty name");
            return None;
        }

        let id = self.fresh_id();
        let lowest = self.state.items.iter().map(|item| item.order).min().unwrap_or(0);
        for item in &mut self.state.items {
            item.order += 1;
        }
        let item = Item::new(id.clone(), name, category_id.into()).with_order(lowest.min(0));
        debug!(
            "[STORE] add_item {} ({:?}) category={} order={}",
            item.id, item.name, item.category_id, item.order
        );
        self.state.items.insert(0, item);
        self.commit();
        Some(id)
    }

    /// Flip `purchased` on the item; unknown ids are ignored
    pub fn toggle_item(&mut self, id: &ItemId) {
        let Some(index) = position_of(&self.state.items, id) else {
            debug!("[STORE] toggle_item ignored: {} not found", id);
            return;
        };
        let item = &mut self.state.items[index];
        item.purchased = !item.purchased;
        debug!("[STORE] toggle_item {} purchased={}", id, item.purchased);
        self.commit();
    }

    /// Remove the item; remaining orders are left as they are
    pub fn delete_item(&mut self, id: &ItemId) {
        let Some(index) = position_of(&self.state.items, id) else {
            debug!("[STORE] delete_item ignored: {} not found", id);
            return;
        };
        self.state.items.remove(index);
        debug!("[STORE] delete_item {}", id);
        self.commit();
    }

    /// Replace the collection with `items`, assigning `order` by position
    ///
    /// `items` must hold exactly the stored ids. Anything else is a caller
    /// bug: it panics in debug builds, and in release builds the reorder
    /// is rejected and logged without touching state.
    pub fn reorder_items(&mut self, items: Vec<Item>) {
        if let Err(e) = self.validate_reorder(&items) {
            error!("[STORE] reorder_items rejected: {}", e);
            if cfg!(debug_assertions) {
                panic!("reorder_items contract violation: {}", e);
            }
            return;
        }

        let mut items = items;
        for (position, item) in items.iter_mut().enumerate() {
            item.order = position as i64;
        }
        debug!("[STORE] reorder_items ({} items)", items.len());
        self.state.items = items;
        self.commit();
    }

    /// Check that `items` is a permutation of the stored collection
    pub fn validate_reorder(&self, items: &[Item]) -> Result<(), ReorderError> {
        if items.len() != self.state.items.len() {
            return Err(ReorderError::LengthMismatch {
                expected: self.state.items.len(),
                found: items.len(),
            });
        }

        let known: HashSet<&ItemId> = self.state.items.iter().map(|item| &item.id).collect();
        let mut seen = HashSet::with_capacity(items.len());
        for item in items {
            if !known.contains(&item.id) {
                return Err(ReorderError::Unknown(item.id.clone()));
            }
            if !seen.insert(&item.id) {
                return Err(ReorderError::Duplicate(item.id.clone()));
            }
        }
        Ok(())
    }

    /// Move one entry of the display projection from `from` to `to` and
    /// store the result as the new order
    pub fn move_item(&mut self, from: usize, to: usize) {
        let projected: Vec<Item> = self.projection().into_iter().cloned().collect();
        if from == to || from >= projected.len() || to >= projected.len() {
            debug!("[STORE] move_item ignored: {} -> {} of {}", from, to, projected.len());
            return;
        }
        let moved = move_within(&projected, from, to);
        self.reorder_items(moved);
    }

    /// Reassign the item's category; the id is not checked against the
    /// category set, so presentation must handle dangling references
    pub fn update_item_category(&mut self, item_id: &ItemId, category_id: impl Into<CategoryId>) {
        let Some(index) = position_of(&self.state.items, item_id) else {
            debug!("[STORE] update_item_category ignored: {} not found", item_id);
            return;
        };
        let category_id = category_id.into();
        if self.state.find_category(&category_id).is_none() {
            warn!("[STORE] item {} assigned to unknown category {}", item_id, category_id);
        }
        self.state.items[index].category_id = category_id;
        self.commit();
    }

    pub fn toggle_theme(&mut self) {
        self.state.is_dark_mode = !self.state.is_dark_mode;
        debug!("[STORE] toggle_theme -> {}", self.state.theme().as_str());
        self.commit();
    }

    // ========================
    // Observation
    // ========================

    /// Register `f` to run after every committed mutation
    pub fn subscribe<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&ListState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    // ========================
    // Internals
    // ========================

    fn fresh_id(&self) -> ItemId {
        loop {
            let id = ItemId::generate();
            if position_of(&self.state.items, &id).is_none() {
                return id;
            }
        }
    }

    fn commit(&mut self) {
        self.persist();
        for (_, subscriber) in &self.subscribers {
            subscriber(&self.state);
        }
    }

    fn persist(&mut self) {
        let result = encode_record(&self.state)
            .and_then(|raw| self.storage.write(&self.config.storage_key, &raw));
        match result {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                warn!(
                    "[STORE] persisting {} failed, keeping in-memory state: {}",
                    self.config.storage_key, e
                );
                self.last_persist_error = Some(e);
            }
        }
    }
}

fn rehydrate<S: StoragePort>(storage: &S, config: &StoreConfig) -> ListState {
    let initial = ListState::seeded(config.seed_categories.clone());
    let raw = match storage.read(&config.storage_key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("[STORE] no record under {}, starting fresh", config.storage_key);
            return initial;
        }
        Err(e) => {
            warn!("[STORE] reading {} failed, starting fresh: {}", config.storage_key, e);
            return initial;
        }
    };

    match decode_record(&raw) {
        Ok(persisted) => {
            let state = persisted.merge_into(initial);
            info!(
                "[STORE] rehydrated {} items ({} purchased), {} categories from {}",
                state.items.len(),
                state.summary().purchased,
                state.categories.len(),
                config.storage_key
            );
            state
        }
        Err(e) => {
            warn!("[STORE] record under {} unreadable, starting fresh: {}", config.storage_key, e);
            initial
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::persistence::MemoryStorage;

    fn store() -> ListStore<MemoryStorage> {
        ListStore::new(MemoryStorage::new())
    }

    #[test]
    fn test_add_item_trims_and_shifts_orders() {
        let mut store = store();
        let bread = store.add_item("Bread", "1").unwrap();
        let milk = store.add_item("  Milk  ", "2").unwrap();

        let state = store.state();
        assert_eq!(state.find_item(&milk).map(|i| (i.name.as_str(), i.order)), Some(("Milk", 0)));
        assert_eq!(state.find_item(&bread).map(|i| i.order), Some(1));
    }

    #[test]
    fn test_add_item_ranks_below_negative_orders() {
        let raw = r#"{"items":[
            {"id":"a","name":"Eggs","categoryId":"1","purchased":false,"order":-3},
            {"id":"b","name":"Flour","categoryId":"1","purchased":false,"order":5}
        ]}"#;
        let mut store = ListStore::new(MemoryStorage::with_entry(crate::DEFAULT_STORAGE_KEY, raw));

        let milk = store.add_item("Milk", "2").unwrap();

        let names: Vec<_> = store.projection().iter().map(|i| i.name.clone()).collect();
        assert_eq!(names, vec!["Milk", "Eggs", "Flour"]);
        let milk_order = store.state().find_item(&milk).map(|i| i.order).unwrap();
        assert!(store.items().iter().filter(|i| i.id != milk).all(|i| i.order > milk_order));
    }

    #[test]
    fn test_add_item_ignores_blank_names() {
        let mut store = store();
        assert!(store.add_item("   ", "1").is_none());
        assert!(store.items().is_empty());
        assert!(store.into_storage().get(crate::DEFAULT_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut store = store();
        store.add_item("Eggs", "1");
        let before = store.snapshot();
        let missing = ItemId::from("missing");

        store.toggle_item(&missing);
        store.delete_item(&missing);
        store.update_item_category(&missing, "3");

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_update_item_category_accepts_any_id() {
        let mut store = store();
        let id = store.add_item("Eggs", "1").unwrap();

        store.update_item_category(&id, "99");

        let item = store.state().find_item(&id).unwrap();
        assert_eq!(item.category_id.as_str(), "99");
        assert!(store.state().category_of(item).is_none());
    }

    #[test]
    fn test_toggle_theme() {
        let mut store = store();
        assert!(!store.is_dark_mode());
        store.toggle_theme();
        assert!(store.is_dark_mode());
        store.toggle_theme();
        assert!(!store.is_dark_mode());
    }

    #[test]
    fn test_validate_reorder_rejects_non_permutations() {
        let mut store = store();
        store.add_item("A", "1");
        store.add_item("B", "1");
        let items = store.items().to_vec();

        assert_eq!(
            store.validate_reorder(&items[..1]),
            Err(ReorderError::LengthMismatch { expected: 2, found: 1 })
        );

        let duplicated = vec![items[0].clone(), items[0].clone()];
        assert_eq!(
            store.validate_reorder(&duplicated),
            Err(ReorderError::Duplicate(items[0].id.clone()))
        );

        let stranger = Item::new(ItemId::from("stranger"), "C", CategoryId::from("1"));
        let unknown = vec![items[0].clone(), stranger];
        assert_eq!(
            store.validate_reorder(&unknown),
            Err(ReorderError::Unknown(ItemId::from("stranger")))
        );

        assert_eq!(store.validate_reorder(&items), Ok(()));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "reorder_items contract violation")]
    fn test_reorder_with_missing_items_asserts_in_debug() {
        let mut store = store();
        store.add_item("A", "1");
        store.add_item("B", "1");
        let first = store.items()[0].clone();
        store.reorder_items(vec![first]);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_reorder_with_missing_items_is_rejected_in_release() {
        let mut store = store();
        store.add_item("A", "1");
        store.add_item("B", "1");
        let before = store.snapshot();
        let first = store.items()[0].clone();

        store.reorder_items(vec![first]);

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_reorder_assigns_positions() {
        let mut store = store();
        let a = store.add_item("A", "1").unwrap();
        let b = store.add_item("B", "1").unwrap();
        let c = store.add_item("C", "1").unwrap();

        // display is C, B, A; move A to the top
        store.move_item(2, 0);

        let order: Vec<_> = store.projection().iter().map(|i| i.id.clone()).collect();
        assert_eq!(order, vec![a.clone(), c.clone(), b.clone()]);
        let orders: Vec<_> = store.items().iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_subscribers_see_committed_state() {
        let mut store = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = store.subscribe(move |state| sink.borrow_mut().push(state.items.len()));

        store.add_item("A", "1");
        store.add_item("", "1");
        store.add_item("B", "1");
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.add_item("C", "1");

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_failed_write_keeps_in_memory_state() {
        let mut storage = MemoryStorage::new();
        storage.set_fail_writes(true);
        let mut store = ListStore::new(storage);

        let id = store.add_item("Coffee", "4").unwrap();

        assert!(store.state().find_item(&id).is_some());
        assert!(matches!(store.last_persist_error(), Some(PersistError::Write(_))));

        store.toggle_item(&id);
        assert!(store.state().find_item(&id).map(|i| i.purchased).unwrap_or(false));
    }

    #[test]
    fn test_corrupt_record_starts_fresh() {
        let storage = MemoryStorage::with_entry(crate::DEFAULT_STORAGE_KEY, "{\"state\": 12");
        let store = ListStore::new(storage);

        assert!(store.items().is_empty());
        assert_eq!(store.categories(), crate::default_categories().as_slice());
        assert!(!store.is_dark_mode());
    }

    #[test]
    fn test_custom_storage_key() {
        let config = StoreConfig::default().with_storage_key("groceries");
        let mut store = ListStore::open(MemoryStorage::new(), config);
        store.toggle_theme();

        let storage = store.into_storage();
        assert!(storage.get("groceries").is_some());
        assert!(storage.get(crate::DEFAULT_STORAGE_KEY).is_none());
    }
}
