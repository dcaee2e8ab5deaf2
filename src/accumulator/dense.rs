//! Dense accumulator for grouped summation
//!
//! One accumulation slot per group index, filled in a single pass over the
//! input. This is the O(n) counterpart of the nested reference loop.

use num_traits::{Num, PrimInt};
use std::ops::AddAssign;
use tracing::trace;

use crate::accumulator::Accumulator;
use crate::validate::group_index;

/// Dense accumulator with one slot per group
///
/// Keys outside `[0, n_groups)` are not written anywhere; they are counted
/// so callers can tell how many elements were dropped.
pub struct DenseAccumulator<T> {
    /// One running total per group index
    values: Vec<T>,

    /// Number of values whose key had no slot
    skipped: usize,
}

impl<T> DenseAccumulator<T>
where
    T: Copy + Num + AddAssign,
{
    /// Create a new dense accumulator with every group total at zero
    ///
    /// # Arguments
    ///
    /// * `n_groups` - The number of groups (length of the output)
    pub fn new(n_groups: usize) -> Self {
        Self {
            values: vec![T::zero(); n_groups],
            skipped: 0,
        }
    }

    /// Number of group slots
    pub fn n_groups(&self) -> usize {
        self.values.len()
    }

    /// Number of values dropped because their key was out of range
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Reset every total to zero without reallocating
    fn reset(&mut self) {
        self.values.fill(T::zero());
        self.skipped = 0;
    }

    /// Add `val` to the total of group `group`
    #[inline]
    fn accumulate(&mut self, group: usize, val: T) {
        match self.values.get_mut(group) {
            Some(slot) => *slot += val,
            None => self.skipped += 1,
        }
    }

    /// Consume the accumulator, returning one total per group index
    pub fn into_values(self) -> Vec<T> {
        if self.skipped > 0 {
            trace!(
                skipped = self.skipped,
                n_groups = self.values.len(),
                "dense accumulator dropped out-of-range keys"
            );
        }
        self.values
    }

    /// Every group index paired with its total, including empty groups
    fn extract_result(self) -> (Vec<usize>, Vec<T>) {
        let keys = (0..self.values.len()).collect();
        (keys, self.into_values())
    }
}

impl<T> Accumulator<usize, T> for DenseAccumulator<T>
where
    T: Copy + Num + AddAssign,
{
    fn reset(&mut self) {
        DenseAccumulator::reset(self)
    }

    fn accumulate(&mut self, key: usize, val: T) {
        DenseAccumulator::accumulate(self, key, val)
    }

    fn extract_result(self) -> (Vec<usize>, Vec<T>) {
        DenseAccumulator::extract_result(self)
    }
}

/// Sum `status` by integer `group` in a single pass
///
/// Entries whose group is negative or `>= n_groups` contribute nothing.
/// Pairs beyond the shorter of the two inputs are not visited.
///
/// # Returns
///
/// A vector of length `n_groups` holding the total of each group.
pub fn sum_by_group_one_pass<T, G>(status: &[T], group: &[G], n_groups: usize) -> Vec<T>
where
    T: Copy + Num + AddAssign,
    G: PrimInt,
{
    let mut accumulator = DenseAccumulator::new(n_groups);

    for (&g, &val) in group.iter().zip(status) {
        match group_index(g, n_groups) {
            Some(idx) => accumulator.accumulate(idx, val),
            None => accumulator.skipped += 1,
        }
    }

    accumulator.into_values()
}

/// Sum `status` by integer `group` in a single pass with no bounds checks
///
/// # Safety
///
/// `status.len()` must be at least `group.len()`, and every element of
/// `group` must convert to an index in `[0, n_groups)`. Any violation reads
/// or writes out of bounds.
pub unsafe fn sum_by_group_unchecked<T, G>(status: &[T], group: &[G], n_groups: usize) -> Vec<T>
where
    T: Copy + Num + AddAssign,
    G: PrimInt,
{
    let mut values = vec![T::zero(); n_groups];

    for (k, &g) in group.iter().enumerate() {
        // SAFETY: upheld by the caller as documented above
        let idx = g.to_usize().unwrap_unchecked();
        *values.get_unchecked_mut(idx) += *status.get_unchecked(k);
    }

    values
}
