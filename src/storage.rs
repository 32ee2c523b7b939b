//! Browser Storage Port
//!
//! `window.localStorage` behind the list store's storage port.

use shoplist_core::{PersistError, PersistResult, StoragePort};

/// Storage port over `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> PersistResult<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| PersistError::Unavailable("window.localStorage".to_string()))
}

impl StoragePort for BrowserStorage {
    fn read(&self, key: &str) -> PersistResult<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| PersistError::Read(format!("{:?}", e)))
    }

    fn write(&mut self, key: &str, value: &str) -> PersistResult<()> {
        // Fails with a QuotaExceededError once the origin's quota is used up
        local_storage()?
            .set_item(key, value)
            .map_err(|e| PersistError::Write(format!("{:?}", e)))
    }
}
