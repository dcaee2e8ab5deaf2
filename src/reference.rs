//! Reference implementation of grouped summation using nested loops
//!
//! For every group, scan every element. Quadratic in the worst case, but
//! trivially correct; the baseline for testing and benchmarking the
//! accumulator-based strategies.

use num_traits::{Num, PrimInt};
use std::ops::AddAssign;

use crate::validate::group_index;

/// Sum `status` by integer `group` with an outer loop over groups
///
/// A group value outside `[0, n_groups)` never equals any loop index, so
/// its element contributes nothing.
pub fn sum_by_group_nested<T, G>(status: &[T], group: &[G], n_groups: usize) -> Vec<T>
where
    T: Copy + Num + AddAssign,
    G: PrimInt,
{
    let mut out = vec![T::zero(); n_groups];

    for (i, total) in out.iter_mut().enumerate() {
        for (&g, &val) in group.iter().zip(status) {
            if group_index(g, n_groups) == Some(i) {
                *total += val;
            }
        }
    }

    out
}

/// Sum `status` by arbitrary `labels`, one scan per unique label
///
/// `uniques` must be the sorted unique labels; the result is aligned with it.
pub fn sum_by_label_nested<K, T>(status: &[T], labels: &[K], uniques: &[K]) -> Vec<T>
where
    K: PartialEq,
    T: Copy + Num + AddAssign,
{
    let mut out = vec![T::zero(); uniques.len()];

    for (unique, total) in uniques.iter().zip(out.iter_mut()) {
        for (label, &val) in labels.iter().zip(status) {
            if label == unique {
                *total += val;
            }
        }
    }

    out
}
