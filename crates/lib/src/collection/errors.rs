//! Error types for collection-level operations.

use thiserror::Error;

/// Structured error types for operations addressing groups by position.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CollectionError {
    /// A group index was beyond the collection's bounds
    #[error("Group index {index} out of bounds for collection of {len} groups")]
    GroupIndexOutOfBounds { index: usize, len: usize },
}

impl CollectionError {
    /// Check if this error indicates an out-of-bounds group index
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, CollectionError::GroupIndexOutOfBounds { .. })
    }
}

// Conversion from CollectionError to the main Error type
impl From<CollectionError> for crate::Error {
    fn from(err: CollectionError) -> Self {
        crate::Error::Collection(err)
    }
}
