//! Item Entity
//!
//! A purchasable entry in the list.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::ids::{CategoryId, ItemId};

/// A shopping list item
///
/// `order` ranks items for manual sorting. It is a relative ranking, so gaps
/// left by deletes are fine; only comparisons between values matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Display name (trimmed, non-empty)
    pub name: String,
    /// Assigned category; not guaranteed to resolve
    pub category_id: CategoryId,
    /// Purchased status
    pub purchased: bool,
    /// Manual sort position
    pub order: i64,
}

impl Item {
    /// Create a new unpurchased item at the front of the ranking
    pub fn new(id: ItemId, name: impl Into<String>, category_id: CategoryId) -> Self {
        Self {
            id,
            name: name.into(),
            category_id,
            purchased: false,
            order: 0,
        }
    }

    /// Builder-style order override
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
