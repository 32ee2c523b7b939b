//! In-memory storage port.

use std::collections::HashMap;

use super::traits::StoragePort;
use crate::error::{PersistError, PersistResult};

/// HashMap-backed storage, used by tests and hosts without durable storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-loaded with `value` under `key`
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.into(), value.into());
        storage
    }

    /// Make every subsequent write fail, as a full quota would
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self, key: &str) -> PersistResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> PersistResult<()> {
        if self.fail_writes {
            return Err(PersistError::Write(format!("quota exceeded writing {}", key)));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
