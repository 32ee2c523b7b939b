//! List State
//!
//! The snapshot handed to presentation: items, categories and the theme flag.
//! Display order is never stored here; see `projection`.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::entity::find_by_id;
use super::ids::{CategoryId, ItemId};
use super::item::Item;

/// Color scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(is_dark_mode: bool) -> Self {
        if is_dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Name used as the CSS class on the document root
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Counts shown under the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListSummary {
    pub total: usize,
    pub purchased: usize,
}

impl ListSummary {
    pub fn of(items: &[Item]) -> Self {
        Self {
            total: items.len(),
            purchased: items.iter().filter(|item| item.purchased).count(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.total - self.purchased
    }
}

/// Canonical store state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListState {
    pub items: Vec<Item>,
    pub categories: Vec<Category>,
    pub is_dark_mode: bool,
}

impl ListState {
    /// Empty list with the given categories and light theme
    pub fn seeded(categories: Vec<Category>) -> Self {
        Self {
            items: Vec::new(),
            categories,
            is_dark_mode: false,
        }
    }

    pub fn find_item(&self, id: &ItemId) -> Option<&Item> {
        find_by_id(&self.items, id)
    }

    pub fn find_category(&self, id: &CategoryId) -> Option<&Category> {
        find_by_id(&self.categories, id)
    }

    /// Category assigned to `item`; `None` when the reference dangles
    pub fn category_of(&self, item: &Item) -> Option<&Category> {
        self.find_category(&item.category_id)
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.is_dark_mode)
    }

    pub fn summary(&self) -> ListSummary {
        ListSummary::of(&self.items)
    }
}
