//! Sort-based accumulator for grouped summation
//!
//! Collects `(key, value)` pairs unsorted, then sorts by key and merges
//! runs of equal keys. Keys can be any orderable label, so this also
//! serves the derived-groups variant without a separate uniquify pass.

use num_traits::{Num, PrimInt};
use std::cmp::Ordering;
use std::ops::AddAssign;

use crate::accumulator::Accumulator;
use crate::validate::group_index;

/// Sort-based accumulator keyed by arbitrary orderable labels
///
/// Only keys that were actually seen appear in the result. Keys must be
/// comparable with each other; incomparable keys (NaN) sort as equal to
/// their neighbours and should be rejected before accumulation.
pub struct SortAccumulator<K, T> {
    /// Keys of the collected pairs, in arrival order
    keys: Vec<K>,

    /// Values of the collected pairs, in arrival order
    values: Vec<T>,
}

impl<K, T> SortAccumulator<K, T>
where
    K: PartialOrd + Copy,
    T: Copy + Num + AddAssign,
{
    /// Create a new sort-based accumulator
    ///
    /// # Arguments
    ///
    /// * `initial_capacity` - Initial capacity for the temporary storage
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(initial_capacity),
            values: Vec::with_capacity(initial_capacity),
        }
    }

    /// Number of pairs collected so far
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn reset(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    fn accumulate(&mut self, key: K, val: T) {
        self.keys.push(key);
        self.values.push(val);
    }

    /// Sort the collected pairs by key and merge equal keys by summing
    ///
    /// The sort is stable, so values within a group are added in arrival
    /// order and floating-point totals match the single-pass result.
    fn extract_result(self) -> (Vec<K>, Vec<T>) {
        if self.keys.is_empty() {
            return (Vec::new(), Vec::new());
        }

        let mut order: Vec<usize> = (0..self.keys.len()).collect();
        order.sort_by(|&a, &b| {
            self.keys[a]
                .partial_cmp(&self.keys[b])
                .unwrap_or(Ordering::Equal)
        });

        let mut merged_keys = Vec::new();
        let mut merged_vals = Vec::new();

        let mut current_key = self.keys[order[0]];
        let mut current_val = self.values[order[0]];

        for &idx in order.iter().skip(1) {
            let key = self.keys[idx];
            let val = self.values[idx];

            if key == current_key {
                current_val += val;
            } else {
                merged_keys.push(current_key);
                merged_vals.push(current_val);
                current_key = key;
                current_val = val;
            }
        }

        merged_keys.push(current_key);
        merged_vals.push(current_val);

        (merged_keys, merged_vals)
    }
}

impl<K, T> Accumulator<K, T> for SortAccumulator<K, T>
where
    K: PartialOrd + Copy,
    T: Copy + Num + AddAssign,
{
    fn reset(&mut self) {
        SortAccumulator::reset(self)
    }

    fn accumulate(&mut self, key: K, val: T) {
        SortAccumulator::accumulate(self, key, val)
    }

    fn extract_result(self) -> (Vec<K>, Vec<T>) {
        SortAccumulator::extract_result(self)
    }
}

/// Sum `status` by arbitrary `labels` using sort and merge
///
/// # Returns
///
/// A tuple of `(unique_labels, sums)` with labels ascending.
pub fn sum_by_label_sorted<K, T>(status: &[T], labels: &[K]) -> (Vec<K>, Vec<T>)
where
    K: PartialOrd + Copy,
    T: Copy + Num + AddAssign,
{
    let mut accumulator = SortAccumulator::new(labels.len());

    for (&key, &val) in labels.iter().zip(status) {
        accumulator.accumulate(key, val);
    }

    accumulator.extract_result()
}

/// Sum `status` by integer `group` using sort and merge
///
/// Entries whose group is outside `[0, n_groups)` contribute nothing.
///
/// # Returns
///
/// A vector of length `n_groups`; groups with no members are zero.
pub fn sum_by_group_sorted<T, G>(status: &[T], group: &[G], n_groups: usize) -> Vec<T>
where
    T: Copy + Num + AddAssign,
    G: PrimInt,
{
    let mut accumulator = SortAccumulator::new(group.len());

    for (&g, &val) in group.iter().zip(status) {
        if let Some(idx) = group_index(g, n_groups) {
            accumulator.accumulate(idx, val);
        }
    }

    let (present, sums) = accumulator.extract_result();

    let mut out = vec![T::zero(); n_groups];
    for (idx, sum) in present.into_iter().zip(sums) {
        out[idx] = sum;
    }
    out
}
