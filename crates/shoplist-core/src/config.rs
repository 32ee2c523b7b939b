//! Store configuration.

use crate::domain::{default_categories, Category};

/// Storage key the list record is written under.
pub const DEFAULT_STORAGE_KEY: &str = "shopping-list-storage";

/// Version stamped on the persisted envelope. Records carrying another
/// version are not loaded.
pub const RECORD_VERSION: u32 = 0;

/// Store configuration.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Key passed to the storage port.
    pub storage_key: String,

    /// Categories used when no persisted record provides them.
    pub seed_categories: Vec<Category>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed_categories: default_categories(),
        }
    }
}

impl StoreConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_seed_categories(mut self, categories: Vec<Category>) -> Self {
        self.seed_categories = categories;
        self
    }
}
