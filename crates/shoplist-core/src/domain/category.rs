//! Category Entity
//!
//! Colored grouping tag assignable to items. The set is seeded once and
//! read-only afterwards.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::ids::CategoryId;

/// A category for grouping items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,
    /// Display name (may be empty)
    pub name: String,
    /// Styling class tokens, e.g. "bg-green-100 dark:bg-green-900/70"
    pub color: String,
}

impl Category {
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Accent class derived from the background token: "bg-green-100 ..." -> "bg-green-500"
    pub fn dot_color(&self) -> String {
        let base = self.color.split_whitespace().next().unwrap_or_default();
        let hue = base
            .strip_prefix("bg-")
            .and_then(|rest| {
                let (hue, shade) = rest.split_once('-')?;
                let shade_is_numeric = shade.chars().next().is_some_and(|c| c.is_ascii_digit());
                (shade_is_numeric && !hue.is_empty()).then_some(hue)
            })
            .unwrap_or(base);
        format!("bg-{}-500", hue)
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Categories seeded on first run
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("1", "", "bg-green-100 dark:bg-green-900/70 dark:text-green-100"),
        Category::new("2", "", "bg-blue-100 dark:bg-blue-900/70 dark:text-blue-100"),
        Category::new("3", "", "bg-red-100 dark:bg-red-900/70 dark:text-red-100"),
        Category::new("4", "", "bg-yellow-100 dark:bg-amber-900/70 dark:text-amber-100"),
        Category::new("5", "", "bg-purple-100 dark:bg-purple-900/70 dark:text-purple-100"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_color_from_background_token() {
        let cat = Category::new("1", "Fruit", "bg-green-100 dark:bg-green-900/70");
        assert_eq!(cat.dot_color(), "bg-green-500");
    }

    #[test]
    fn test_dot_color_falls_back_to_whole_token() {
        let cat = Category::new("9", "Odd", "custom");
        assert_eq!(cat.dot_color(), "bg-custom-500");
    }

    #[test]
    fn test_default_categories_are_unique() {
        let cats = default_categories();
        assert_eq!(cats.len(), 5);
        let ids: std::collections::HashSet<_> = cats.iter().map(|c| &c.id).collect();
        assert_eq!(ids.len(), 5);
        assert_eq!(cats[3].dot_color(), "bg-yellow-500");
    }
}
