//! Ordered, keyed element container.
//!
//! A [`Group`] is the inner level of a grouped collection: an ordered,
//! index-addressable sequence of elements that all share one derived key.
//! Groups are normally owned and mutated by a
//! [`GroupedCollection`](crate::GroupedCollection), which records a change for
//! every index-level mutation it performs and guarantees that an owned group
//! is never empty.

mod errors;

pub use errors::GroupError;

use std::ops::Index;

use crate::equivalence::Equivalence;

/// An ordered sequence of elements sharing one derived key.
///
/// Insertion order is significant and duplicates of equal elements are
/// permitted. The key is fixed at construction; the owning collection is
/// responsible for only ever storing elements that map to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K, T> {
    key: K,
    items: Vec<T>,
}

impl<K, T> Group<K, T> {
    /// Creates a new empty group for `key`.
    pub fn new(key: K) -> Self {
        Self {
            key,
            items: Vec::new(),
        }
    }

    /// Creates a group for `key` pre-populated with `items`, in order.
    pub fn with_items(key: K, items: impl IntoIterator<Item = T>) -> Self {
        Self {
            key,
            items: items.into_iter().collect(),
        }
    }

    /// The key shared by every element of this group.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the number of elements in the group.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the group holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets an element by index.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns an iterator over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Appends an element at the end of the group.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Inserts an element at `index`, shifting later elements right.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), GroupError> {
        let len = self.items.len();
        if index > len {
            return Err(GroupError::IndexOutOfBounds { index, len });
        }
        self.items.insert(index, item);
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, GroupError> {
        let len = self.items.len();
        if index >= len {
            return Err(GroupError::IndexOutOfBounds { index, len });
        }
        Ok(self.items.remove(index))
    }

    /// Removes the first element equivalent to `item` under `comparer`,
    /// returning the index it occupied. Absence is a no-op, not an error.
    pub fn remove_first(&mut self, item: &T, comparer: &impl Equivalence<T>) -> Option<usize> {
        let index = self.find_first(item, comparer)?;
        self.items.remove(index);
        Some(index)
    }

    /// Relocates the element at `from` so that it ends up at `to`.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), GroupError> {
        let len = self.items.len();
        if from >= len {
            return Err(GroupError::IndexOutOfBounds { index: from, len });
        }
        if to >= len {
            return Err(GroupError::IndexOutOfBounds { index: to, len });
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        Ok(())
    }

    /// Index of the first element equivalent to `item` under `comparer`.
    pub(crate) fn find_first(&self, item: &T, comparer: &impl Equivalence<T>) -> Option<usize> {
        self.items
            .iter()
            .position(|existing| comparer.equivalent(existing, item))
    }

    /// Elements as a slice, for diffing.
    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the group, yielding its key.
    pub(crate) fn into_key(self) -> K {
        self.key
    }

    // Unchecked index ops for the reconciler, which derives indices from a
    // diff of this very group. Out-of-range here is an internal logic bug and
    // panics like the underlying Vec.

    pub(crate) fn take_at(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    pub(crate) fn put_at(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
    }

    pub(crate) fn set_at(&mut self, index: usize, item: T) {
        self.items[index] = item;
    }
}

impl<K, T> Index<usize> for Group<K, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, K, T> IntoIterator for &'a Group<K, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
