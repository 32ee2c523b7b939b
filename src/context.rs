//! Application Context
//!
//! The list store instance shared via Leptos Context API. Components call
//! its operations here and re-render from the reactive mirror in `state`.

use leptos::prelude::*;
use reactive_stores::Store;
use shoplist_core::{CategoryId, Item, ItemId, ListStore, StoreConfig};

use crate::storage::BrowserStorage;
use crate::store::{store_sync, AppState, AppStore};

type CoreStore = ListStore<BrowserStorage>;

/// App-wide store handle provided via context
#[derive(Clone, Copy)]
pub struct ShopContext {
    /// The list store; not Send, so kept in local storage
    core: StoredValue<CoreStore, LocalStorage>,
    /// Reactive mirror of the store's snapshot - read
    pub state: AppStore,
    /// Whether the last write to localStorage failed
    pub save_failed: RwSignal<bool>,
}

impl ShopContext {
    /// Rehydrate from localStorage and wire the reactive mirror
    pub fn new() -> Self {
        let mut core = ListStore::open(BrowserStorage, StoreConfig::default());
        let state = Store::new(AppState::from(core.state()));
        core.subscribe(move |snapshot| store_sync(&state, snapshot));

        Self {
            core: StoredValue::new_local(core),
            state,
            save_failed: RwSignal::new(false),
        }
    }

    fn apply(&self, op: impl FnOnce(&mut CoreStore)) {
        let failed = self
            .core
            .try_update_value(|store| {
                op(store);
                store.last_persist_error().is_some()
            })
            .unwrap_or(false);
        if failed != self.save_failed.get_untracked() {
            self.save_failed.set(failed);
        }
    }

    pub fn add_item(&self, name: &str, category_id: CategoryId) {
        self.apply(|store| {
            store.add_item(name, category_id);
        });
    }

    pub fn toggle_item(&self, id: &ItemId) {
        self.apply(|store| store.toggle_item(id));
    }

    pub fn delete_item(&self, id: &ItemId) {
        self.apply(|store| store.delete_item(id));
    }

    /// Store a full reordered sequence
    pub fn reorder_items(&self, items: Vec<Item>) {
        self.apply(|store| store.reorder_items(items));
    }

    /// Move one row of the display projection; the store derives and
    /// stores the full reordered sequence
    pub fn move_item(&self, from: usize, to: usize) {
        self.apply(|store| store.move_item(from, to));
    }

    pub fn update_item_category(&self, item_id: &ItemId, category_id: CategoryId) {
        self.apply(|store| store.update_item_category(item_id, category_id));
    }

    pub fn toggle_theme(&self) {
        self.apply(|store| store.toggle_theme());
    }
}

/// Get the shop context
pub fn use_shop() -> ShopContext {
    expect_context::<ShopContext>()
}
