//! Persistence Layer
//!
//! Storage port abstraction, record format, and adapters.

mod memory;
mod record;
mod traits;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;
pub use record::{decode_record, encode_record, PersistedEnvelope, PersistedState};
pub use traits::StoragePort;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStorage;
