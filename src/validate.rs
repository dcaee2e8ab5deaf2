//! Input checks shared by every grouped-sum entry point

use num_traits::PrimInt;
use tracing::debug;

use crate::error::{GroupSumError, Result};

/// Convert a group label to a dense index, if it lies in `[0, n_groups)`
#[inline]
pub fn group_index<G: PrimInt>(group: G, n_groups: usize) -> Option<usize> {
    group.to_usize().filter(|&g| g < n_groups)
}

/// Status and group sequences must be positionally aligned
pub fn check_lengths(status_len: usize, group_len: usize) -> Result<()> {
    if status_len != group_len {
        debug!(status_len, group_len, "rejecting misaligned inputs");
        return Err(GroupSumError::LengthMismatch {
            status: status_len,
            group: group_len,
        });
    }
    Ok(())
}

/// Every group index must lie in `[0, n_groups)`; reports the first that does not
pub fn check_range<G: PrimInt>(group: &[G], n_groups: usize) -> Result<()> {
    match group
        .iter()
        .position(|&g| group_index(g, n_groups).is_none())
    {
        Some(position) => {
            debug!(position, n_groups, "rejecting out-of-range group index");
            Err(GroupSumError::GroupOutOfRange { position, n_groups })
        }
        None => Ok(()),
    }
}

/// Every label must be comparable with itself (rules out NaN)
pub fn check_orderable<K: PartialOrd>(labels: &[K]) -> Result<()> {
    match labels.iter().position(|k| k.partial_cmp(k).is_none()) {
        Some(position) => {
            debug!(position, "rejecting unordered group label");
            Err(GroupSumError::UnorderedLabel { position })
        }
        None => Ok(()),
    }
}
