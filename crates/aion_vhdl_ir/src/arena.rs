//! Dense, ID-indexed storage for owned tree nodes.
//!
//! The [`Arena`] keeps nodes in insertion order and hands out opaque
//! [`ArenaId`] keys. Nodes are never removed or reordered, so an ID stays
//! valid for as long as its owning container lives.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Trait for opaque ID types used as arena keys.
///
/// Implementors must provide a bijection between `u32` indices and the ID type.
pub trait ArenaId: Copy {
    /// Creates an ID from a raw `u32` index.
    fn from_raw(index: u32) -> Self;

    /// Returns the raw `u32` index.
    fn as_raw(self) -> u32;
}

/// An append-only container owning its items, keyed by ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena<I: ArenaId, T> {
    items: Vec<T>,
    #[serde(skip)]
    _marker: PhantomData<I>,
}

impl<I: ArenaId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ArenaId, T> Arena<I, T> {
    /// Creates a new, empty arena.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Returns the ID the next call to [`alloc`](Self::alloc) will hand out.
    ///
    /// Lets an owner stamp a node with its own ID before moving it in.
    pub fn next_id(&self) -> I {
        I::from_raw(self.items.len() as u32)
    }

    /// Moves an item into the arena and returns its ID.
    pub fn alloc(&mut self, item: T) -> I {
        let id = self.next_id();
        self.items.push(item);
        id
    }

    /// Returns a reference to the item with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID is out of bounds.
    pub fn get(&self, id: I) -> &T {
        &self.items[id.as_raw() as usize]
    }

    /// Returns a mutable reference to the item with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID is out of bounds.
    pub fn get_mut(&mut self, id: I) -> &mut T {
        &mut self.items[id.as_raw() as usize]
    }

    /// Returns the number of items in the arena.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the arena contains no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over `(ID, &T)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (I::from_raw(i as u32), item))
    }

    /// Iterates over references to items in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<I: ArenaId, T> Index<I> for Arena<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        self.get(id)
    }
}

impl<I: ArenaId, T> IndexMut<I> for Arena<I, T> {
    fn index_mut(&mut self, id: I) -> &mut T {
        self.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{ConcStmtId, EntityId};

    #[test]
    fn alloc_and_get() {
        let mut arena: Arena<EntityId, String> = Arena::new();
        let id = arena.alloc("counter".to_string());
        assert_eq!(arena[id], "counter");
    }

    #[test]
    fn next_id_matches_alloc() {
        let mut arena: Arena<ConcStmtId, u32> = Arena::new();
        arena.alloc(7);
        let predicted = arena.next_id();
        let actual = arena.alloc(8);
        assert_eq!(predicted, actual);
        assert_eq!(actual.as_raw(), 1);
    }

    #[test]
    fn get_mut_modifies() {
        let mut arena: Arena<EntityId, String> = Arena::new();
        let id = arena.alloc("original".to_string());
        arena.get_mut(id).push_str("_v2");
        assert_eq!(arena[id], "original_v2");
    }

    #[test]
    fn empty_arena() {
        let arena: Arena<EntityId, u32> = Arena::default();
        assert!(arena.is_empty());
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let mut arena: Arena<ConcStmtId, &str> = Arena::new();
        arena.alloc("a");
        arena.alloc("b");
        arena.alloc("c");
        let collected: Vec<_> = arena.iter().map(|(id, v)| (id.as_raw(), *v)).collect();
        assert_eq!(collected, vec![(0, "a"), (1, "b"), (2, "c")]);
    }

    #[test]
    fn serde_roundtrip() {
        let mut arena: Arena<EntityId, String> = Arena::new();
        arena.alloc("first".to_string());
        arena.alloc("second".to_string());
        let json = serde_json::to_string(&arena).unwrap();
        let restored: Arena<EntityId, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored[EntityId::from_raw(1)], "second");
    }
}
