//! Domain Layer
//!
//! Entities, identifiers and the state snapshot.
//! Only serde (and uuid for id generation) here; no storage or UI concerns.

mod category;
mod entity;
mod ids;
mod item;
mod state;

pub use category::{default_categories, Category};
pub use entity::{find_by_id, position_of, Entity};
pub use ids::{CategoryId, ItemId};
pub use item::Item;
pub use state::{ListState, ListSummary, Theme};
