//! Ordered collection of keyed groups over a flat item sequence.
//!
//! [`GroupedCollection`] owns an ordered sequence of [`Group`]s with unique
//! keys. Elements are partitioned into groups by a caller-supplied key
//! function; group order is the order in which each distinct key was first
//! seen, never a sort of the key values. Flattening the groups in order yields
//! the logical item sequence.
//!
//! The collection is a single-threaded, synchronous structure meant to be
//! owned by exactly one mutator (say, a view model) and read by any number of
//! observers on the same thread. Every mutation is recorded as a
//! [`Change`] in an internal log that the observer side drains with
//! [`GroupedCollection::drain_changes`]; the log grows until it is drained.

mod errors;

pub use errors::CollectionError;

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::ops::Index;

use crate::change::Change;
use crate::equivalence::{DefaultEquality, Equivalence};
use crate::group::Group;

/// An ordered sequence of groups with unique keys, plus a key-to-position map
/// for O(1) group lookup.
///
/// # Invariants
///
/// - No two groups share a key, and no group is empty.
/// - Group order is first-occurrence order of keys.
/// - The position map always agrees with the group sequence.
///
/// ```
/// use regroup::GroupedCollection;
///
/// let fruit = ["Apple", "Banana", "Pear", "Pineapple"];
/// let coll = GroupedCollection::with_items(
///     |s: &String| s.chars().next().unwrap(),
///     fruit.iter().map(|s| s.to_string()),
/// );
///
/// assert_eq!(coll.keys().copied().collect::<Vec<_>>(), ['A', 'B', 'P']);
/// assert_eq!(coll[2].len(), 2);
/// ```
pub struct GroupedCollection<K, T> {
    key_of: Box<dyn Fn(&T) -> K>,
    groups: Vec<Group<K, T>>,
    positions: HashMap<K, usize>,
    changes: VecDeque<Change<K, T>>,
}

impl<K, T> GroupedCollection<K, T>
where
    K: Eq + Hash + Clone,
    T: Clone,
{
    /// Creates an empty collection partitioned by `key_of`.
    ///
    /// `key_of` must be pure: the same element value always yields the same
    /// key.
    pub fn new(key_of: impl Fn(&T) -> K + 'static) -> Self {
        Self {
            key_of: Box::new(key_of),
            groups: Vec::new(),
            positions: HashMap::new(),
            changes: VecDeque::new(),
        }
    }

    /// Creates a collection pre-populated from `items` in a single
    /// left-to-right pass, preserving first-occurrence key order.
    ///
    /// Construction records no changes; there can be no observer holding a
    /// reference yet.
    pub fn with_items(
        key_of: impl Fn(&T) -> K + 'static,
        items: impl IntoIterator<Item = T>,
    ) -> Self {
        let mut collection = Self::new(key_of);
        for item in items {
            collection.insert_item(item, false);
        }
        collection
    }

    /// Adds one element, appending to its group or creating a new group at
    /// the tail. Never reorders existing groups.
    ///
    /// Records an `ElementInserted`, preceded by a `GroupInserted` when the
    /// element's key was not present before.
    pub fn add(&mut self, item: T) {
        self.insert_item(item, true);
    }

    /// Removes the first element structurally equal to `item` from the group
    /// matching its key. Returns `false` when no such element exists; this is
    /// an expected outcome, not an error.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_with(item, &DefaultEquality)
    }

    /// Like [`remove`](Self::remove), but matching under `comparer`.
    ///
    /// A group emptied by the removal is deleted, recorded as a
    /// `GroupRemoved` after the `ElementRemoved`.
    pub fn remove_with(&mut self, item: &T, comparer: &impl Equivalence<T>) -> bool {
        let key = (self.key_of)(item);
        let Some(gi) = self.positions.get(&key).copied() else {
            return false;
        };
        let Some(ei) = self.groups[gi].find_first(item, comparer) else {
            return false;
        };

        let value = self.groups[gi].take_at(ei);
        self.record(Change::ElementRemoved {
            group: gi,
            index: ei,
            value,
        });

        if self.groups[gi].is_empty() {
            let group = self.remove_group_at(gi);
            self.record(Change::GroupRemoved {
                index: gi,
                key: group.into_key(),
            });
        }
        true
    }

    /// Relocates an element within the group at `group`, recording an
    /// `ElementMoved`.
    pub fn move_item(&mut self, group: usize, from: usize, to: usize) -> crate::Result<()> {
        let len = self.groups.len();
        let Some(target) = self.groups.get_mut(group) else {
            return Err(CollectionError::GroupIndexOutOfBounds { index: group, len }.into());
        };
        target.move_item(from, to)?;
        self.record(Change::ElementMoved { group, from, to });
        Ok(())
    }

    /// Removes all groups and elements, recording a single `Reset`.
    pub fn clear(&mut self) {
        self.groups.clear();
        self.positions.clear();
        self.record(Change::Reset);
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if the collection holds no groups (and thus no elements).
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of elements across all groups.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// The ordered sequence of current group keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(Group::key)
    }

    /// Lazy view of all elements in flattened order: groups in order, each
    /// group's elements in order.
    ///
    /// The iterator borrows the collection, so mutating while an enumeration
    /// is in progress is rejected at compile time rather than detected at
    /// runtime.
    pub fn iter_items(&self) -> impl Iterator<Item = &T> {
        self.groups.iter().flat_map(|group| group.iter())
    }

    /// Gets a group by position.
    pub fn get(&self, index: usize) -> Option<&Group<K, T>> {
        self.groups.get(index)
    }

    /// Current position of the group keyed `key`, if present.
    pub fn position_of(&self, key: &K) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Gets the group keyed `key`, if present.
    pub fn group_by_key(&self, key: &K) -> Option<&Group<K, T>> {
        self.position_of(key).map(|gi| &self.groups[gi])
    }

    /// Drains all pending change records, oldest first.
    pub fn drain_changes(&mut self) -> Vec<Change<K, T>> {
        self.changes.drain(..).collect()
    }

    /// Non-consuming view of the pending change records.
    pub fn changes(&self) -> impl Iterator<Item = &Change<K, T>> {
        self.changes.iter()
    }

    fn insert_item(&mut self, item: T, record: bool) {
        let key = (self.key_of)(&item);
        let (gi, new_group) = match self.positions.get(&key).copied() {
            Some(gi) => (gi, false),
            None => {
                let gi = self.groups.len();
                self.groups.push(Group::new(key.clone()));
                self.positions.insert(key.clone(), gi);
                (gi, true)
            }
        };

        let ei = self.groups[gi].len();
        if record {
            if new_group {
                self.record(Change::GroupInserted { index: gi, key });
            }
            self.record(Change::ElementInserted {
                group: gi,
                index: ei,
                value: item.clone(),
            });
        }
        self.groups[gi].push(item);
    }

    // Internal structural ops shared with the reconciler. These keep the
    // position map consistent but record nothing; recording is the caller's
    // responsibility since only it knows the observable shape of the edit.

    pub(crate) fn insert_group_at(&mut self, index: usize, group: Group<K, T>) {
        self.groups.insert(index, group);
        self.reindex();
    }

    pub(crate) fn remove_group_at(&mut self, index: usize) -> Group<K, T> {
        let group = self.groups.remove(index);
        self.reindex();
        group
    }

    pub(crate) fn group_mut(&mut self, index: usize) -> &mut Group<K, T> {
        &mut self.groups[index]
    }

    pub(crate) fn record(&mut self, change: Change<K, T>) {
        self.changes.push_back(change);
    }

    fn reindex(&mut self) {
        self.positions = self
            .groups
            .iter()
            .enumerate()
            .map(|(i, group)| (group.key().clone(), i))
            .collect();
    }
}

impl<K, T> Index<usize> for GroupedCollection<K, T> {
    type Output = Group<K, T>;

    fn index(&self, index: usize) -> &Group<K, T> {
        &self.groups[index]
    }
}

impl<K: fmt::Debug, T: fmt::Debug> fmt::Debug for GroupedCollection<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupedCollection")
            .field("groups", &self.groups)
            .field("pending_changes", &self.changes.len())
            .finish_non_exhaustive()
    }
}
