//!
//! Regroup: incrementally reconciled grouped collections.
//! This library provides a two-level ordered container, elements partitioned
//! into ordered keyed groups, that can be minimally transformed from one
//! snapshot to another while recording fine-grained change records.
//!
//! ## Core Concepts
//!
//! * **Groups (`group::Group`)**: An ordered sequence of elements sharing one
//!   derived key; the unit of grouping.
//! * **GroupedCollection (`collection::GroupedCollection`)**: An ordered
//!   sequence of groups with unique keys. Owns all groups, exposes flat and
//!   grouped views, direct mutation (`add`, `remove`, `move_item`, `clear`),
//!   and a drainable log of structural changes.
//! * **Reconciliation (`reconcile`)**: `replace_with` diffs the live
//!   collection against a target snapshot at the group level and, inside each
//!   retained group, at the element level, then applies the minimal edit
//!   script in place. Retained groups keep their instances so unaffected
//!   observers see no churn.
//! * **Equivalence (`equivalence::Equivalence`)**: The pluggable relation used
//!   to match elements across snapshots, independent of identity (e.g. a
//!   case-insensitive comparer). Keys always match by exact equality.
//! * **Changes (`change::Change`)**: Structural diff records (group/element
//!   insert, remove, move, reset) that replay deterministically onto a flat
//!   mirror of the grouped state.

pub mod change;
pub mod collection;
pub mod equivalence;
pub mod group;
pub mod reconcile;

pub use change::Change;
pub use collection::GroupedCollection;
pub use equivalence::{DefaultEquality, Equivalence};
pub use group::Group;

/// Result type used throughout the regroup library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the regroup library.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured errors from group index operations
    #[error(transparent)]
    Group(group::GroupError),

    /// Structured errors from collection-level operations
    #[error(transparent)]
    Collection(collection::CollectionError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Group(_) => "group",
            Error::Collection(_) => "collection",
        }
    }

    /// Check if this error indicates an index beyond the addressed bounds.
    pub fn is_out_of_bounds(&self) -> bool {
        match self {
            Error::Group(group_err) => group_err.is_out_of_bounds(),
            Error::Collection(collection_err) => collection_err.is_out_of_bounds(),
        }
    }
}
