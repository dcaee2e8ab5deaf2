//! Accumulator implementations for grouped summation
//!
//! An accumulator receives `(group, value)` pairs one at a time and
//! produces per-group totals ordered by group. Two strategies are
//! provided with different performance characteristics:
//!
//! - [`DenseAccumulator`]: one slot per group index, a single O(n) pass
//! - [`SortAccumulator`]: collect pairs, then sort and merge, for keys that
//!   are arbitrary orderable labels rather than dense indices

pub mod dense;
pub mod sort;

use num_traits::Num;
use std::ops::AddAssign;

pub use dense::{sum_by_group_one_pass, sum_by_group_unchecked, DenseAccumulator};
pub use sort::{sum_by_group_sorted, sum_by_label_sorted, SortAccumulator};

/// Trait for accumulators that fold status values into group totals
pub trait Accumulator<K, T>
where
    T: Copy + Num + AddAssign,
{
    /// Reset the accumulator so it can be reused for another input
    fn reset(&mut self);

    /// Accumulate a single value into the total for `key`
    fn accumulate(&mut self, key: K, val: T);

    /// Extract the totals as `(keys, sums)` with keys in ascending order
    fn extract_result(self) -> (Vec<K>, Vec<T>);
}

/// Feed every `(key, status)` pair into `accumulator`, in input order
pub fn accumulate_all<K, T, A>(accumulator: &mut A, keys: impl IntoIterator<Item = K>, status: &[T])
where
    T: Copy + Num + AddAssign,
    A: Accumulator<K, T>,
{
    for (key, &val) in keys.into_iter().zip(status) {
        accumulator.accumulate(key, val);
    }
}
