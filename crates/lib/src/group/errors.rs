//! Error types for group operations.

use thiserror::Error;

/// Structured error types for index-addressed group operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GroupError {
    /// An element index was beyond the group's bounds
    #[error("Index {index} out of bounds for group of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl GroupError {
    /// Check if this error indicates an out-of-bounds index
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, GroupError::IndexOutOfBounds { .. })
    }
}

// Conversion from GroupError to the main Error type
impl From<GroupError> for crate::Error {
    fn from(err: GroupError) -> Self {
        crate::Error::Group(err)
    }
}
