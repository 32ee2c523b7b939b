//! Shopping List Core
//!
//! Layered the same way as the rest of the workspace:
//! - domain: entities and the read-only state snapshot
//! - projection: the purchased-partitioned display order
//! - persistence: storage port, record format and adapters
//! - store: the observable, persisted List Store

pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod projection;
pub mod store;


pub use config::{StoreConfig, DEFAULT_STORAGE_KEY, RECORD_VERSION};
pub use domain::{
    default_categories, find_by_id, position_of, Category, CategoryId, Entity, Item, ItemId,
    ListState, ListSummary, Theme,
};
pub use error::{PersistError, PersistResult, ReorderError};
pub use persistence::{MemoryStorage, StoragePort};
#[cfg(not(target_arch = "wasm32"))]
pub use persistence::JsonFileStorage;
pub use projection::{display_order, display_order_owned, move_within, partition, Partition};
pub use store::{ListStore, SubscriptionId};
