//! Domain Layer - Core Entity Trait
//!
//! Basic contract for everything the store keeps in a collection.

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Index of the entity with `id` in `entities`, if present
pub fn position_of<T: Entity>(entities: &[T], id: &T::Id) -> Option<usize> {
    entities.iter().position(|entity| entity.id() == id)
}

/// Entity with `id` in `entities`, if present
pub fn find_by_id<'a, T: Entity>(entities: &'a [T], id: &T::Id) -> Option<&'a T> {
    entities.iter().find(|entity| entity.id() == id)
}
