//! Reactive State Mirror
//!
//! Leptos reactive_stores copy of the list store's snapshot, for
//! fine-grained reactivity. Written only by the store subscription in
//! `ShopContext`; components read it and never write.

use leptos::prelude::*;
use reactive_stores::Store;
use shoplist_core::{Category, Item, ListState};

/// Read-only view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All items, in collection order (use the display projection to render)
    pub items: Vec<Item>,
    /// Seeded categories
    pub categories: Vec<Category>,
    /// Theme preference
    pub is_dark_mode: bool,
}

impl From<&ListState> for AppState {
    fn from(state: &ListState) -> Self {
        Self {
            items: state.items.clone(),
            categories: state.categories.clone(),
            is_dark_mode: state.is_dark_mode,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Copy a committed snapshot into the reactive store, touching only the
/// fields that changed
pub fn store_sync(store: &AppStore, snapshot: &ListState) {
    if store.items().with_untracked(|items| items != &snapshot.items) {
        *store.items().write() = snapshot.items.clone();
    }
    if store.categories().with_untracked(|cats| cats != &snapshot.categories) {
        *store.categories().write() = snapshot.categories.clone();
    }
    if store.is_dark_mode().get_untracked() != snapshot.is_dark_mode {
        *store.is_dark_mode().write() = snapshot.is_dark_mode;
    }
}
