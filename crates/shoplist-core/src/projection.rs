//! Display Projection
//!
//! Unpurchased items first, purchased after, each group by ascending `order`.
//! Computed on every read; never stored.

use crate::domain::Item;

/// Items in display order
///
/// Stable sort on `(purchased, order)`, so equal keys keep their collection
/// position and repeated calls on the same collection agree.
pub fn display_order(items: &[Item]) -> Vec<&Item> {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by_key(|item| (item.purchased, item.order));
    sorted
}

/// Owned copy of `display_order`, the shape `reorder_items` takes
pub fn display_order_owned(items: &[Item]) -> Vec<Item> {
    display_order(items).into_iter().cloned().collect()
}

/// Move the element at `from` to index `to`, shifting the ones in between
///
/// Out-of-range indices leave the sequence unchanged.
pub fn move_within(items: &[Item], from: usize, to: usize) -> Vec<Item> {
    let mut moved = items.to_vec();
    if from >= moved.len() || to >= moved.len() || from == to {
        return moved;
    }
    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}

/// The two display groups
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub pending: Vec<&'a Item>,
    pub purchased: Vec<&'a Item>,
}

pub fn partition(items: &[Item]) -> Partition<'_> {
    let (purchased, pending) = display_order(items)
        .into_iter()
        .partition(|item| item.purchased);
    Partition { pending, purchased }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryId, ItemId};

    fn make_item(id: &str, order: i64, purchased: bool) -> Item {
        let mut item = Item::new(ItemId::from(id), format!("Item {}", id), CategoryId::from("1"))
            .with_order(order);
        item.purchased = purchased;
        item
    }

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|item| item.id.to_string()).collect()
    }

    #[test]
    fn test_unpurchased_before_purchased() {
        let items = vec![
            make_item("a", 0, true),
            make_item("b", 5, false),
            make_item("c", 1, false),
            make_item("d", -3, true),
        ];

        assert_eq!(ids(&display_order(&items)), vec!["c", "b", "d", "a"]);
    }

    #[test]
    fn test_equal_orders_keep_collection_position() {
        let items = vec![
            make_item("x", 2, false),
            make_item("y", 2, false),
            make_item("z", 2, false),
        ];

        let first = ids(&display_order(&items));
        assert_eq!(first, vec!["x", "y", "z"]);
        assert_eq!(ids(&display_order(&items)), first);
    }

    #[test]
    fn test_move_within() {
        let items = vec![
            make_item("a", 0, false),
            make_item("b", 1, false),
            make_item("c", 2, false),
        ];
        let moved_ids = |from: usize, to: usize| -> Vec<String> {
            move_within(&items, from, to)
                .into_iter()
                .map(|i| i.id.to_string())
                .collect()
        };

        let down = moved_ids(0, 2);
        assert_eq!(down, vec!["b", "c", "a"]);

        let up = moved_ids(2, 0);
        assert_eq!(up, vec!["c", "a", "b"]);

        assert_eq!(move_within(&items, 0, 9), items);
    }

    #[test]
    fn test_partition_groups() {
        let items = vec![make_item("a", 0, true), make_item("b", 1, false)];
        let groups = partition(&items);
        assert_eq!(ids(&groups.pending), vec!["b"]);
        assert_eq!(ids(&groups.purchased), vec!["a"]);
    }
}
