//! Persistence Layer - Storage Port
//!
//! Key-value interface the store writes its record through.
//! Implementations can use browser localStorage, files, memory, etc.

use crate::error::PersistResult;

/// Durable key-value storage
///
/// Synchronous by contract: every store operation runs to completion
/// before the next one starts.
pub trait StoragePort {
    /// Read the value under `key`; `Ok(None)` when nothing is stored
    fn read(&self, key: &str) -> PersistResult<Option<String>>;

    /// Replace the value under `key`
    fn write(&mut self, key: &str, value: &str) -> PersistResult<()>;
}

impl<S: StoragePort + ?Sized> StoragePort for Box<S> {
    fn read(&self, key: &str) -> PersistResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> PersistResult<()> {
        (**self).write(key, value)
    }
}
