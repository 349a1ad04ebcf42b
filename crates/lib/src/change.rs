//! Structural change records emitted by [`GroupedCollection`] mutations.
//!
//! Every mutation of a collection is described by a sequence of [`Change`]
//! records. Indices in a record are valid at the moment the record is made,
//! so replaying a drained stream with [`Change::apply_to`] reconstructs the
//! exact final grouped state from the state the stream started at.
//!
//! [`GroupedCollection`]: crate::GroupedCollection

/// One structural edit of a grouped collection.
///
/// `group` is always the position of the affected group at the time of the
/// edit; element indices are positions within that group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<K, T> {
    /// A new, empty group appeared at `index`.
    GroupInserted { index: usize, key: K },
    /// The group at `index` was removed together with all of its elements.
    GroupRemoved { index: usize, key: K },
    /// `value` was inserted at `index` within the group at `group`.
    ElementInserted { group: usize, index: usize, value: T },
    /// `value` was removed from `index` within the group at `group`.
    ElementRemoved { group: usize, index: usize, value: T },
    /// An element was relocated from `from` to `to` within the group at `group`.
    ElementMoved { group: usize, from: usize, to: usize },
    /// The whole collection was cleared.
    Reset,
}

impl<K: Clone, T: Clone> Change<K, T> {
    /// Replays this change onto a flat mirror of the grouped state.
    ///
    /// The mirror is a plain `(key, elements)` sequence in group order, the
    /// shape an observer keeping shadow state would maintain. A well-formed
    /// change stream never addresses out-of-range indices; replaying a stream
    /// against the wrong base state panics like any slice indexing would.
    pub fn apply_to(&self, mirror: &mut Vec<(K, Vec<T>)>) {
        match self {
            Change::GroupInserted { index, key } => {
                mirror.insert(*index, (key.clone(), Vec::new()));
            }
            Change::GroupRemoved { index, .. } => {
                mirror.remove(*index);
            }
            Change::ElementInserted {
                group,
                index,
                value,
            } => {
                mirror[*group].1.insert(*index, value.clone());
            }
            Change::ElementRemoved { group, index, .. } => {
                mirror[*group].1.remove(*index);
            }
            Change::ElementMoved { group, from, to } => {
                let value = mirror[*group].1.remove(*from);
                mirror[*group].1.insert(*to, value);
            }
            Change::Reset => mirror.clear(),
        }
    }
}
