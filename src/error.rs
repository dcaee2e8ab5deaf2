//! Error types for grouped summation

use thiserror::Error;

/// Errors raised when the inputs of a grouped sum are malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupSumError {
    #[error("status and group lengths differ: {status} status values, {group} group labels")]
    LengthMismatch { status: usize, group: usize },

    #[error("group index at position {position} is outside [0, {n_groups})")]
    GroupOutOfRange { position: usize, n_groups: usize },

    #[error("group label at position {position} cannot be ordered")]
    UnorderedLabel { position: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GroupSumError>;
