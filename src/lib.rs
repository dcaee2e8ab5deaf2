//! # groupsum: grouped summation of event status values
//!
//! Given a vector of numeric status values and a parallel vector of group
//! labels, compute per group the sum of the status values belonging to it.
//! This is the "count events by group" building block of survival-analysis
//! and event-count statistics.
//!
//! ## Overview
//!
//! Two families of entry points are provided:
//!
//! - **Indexed**: labels are integers already enumerated as `0..n_groups`.
//!   The result has exactly `n_groups` entries.
//! - **Derived**: labels are arbitrary orderable values. They are sorted and
//!   deduplicated first, and the result follows that ascending order.
//!
//! Each family can run with one of three strategies ([`Strategy`]):
//!
//! - **Nested**: loop over groups, then over every element (O(n_groups × n))
//! - **Single pass**: a dense accumulator visited once per element (O(n))
//! - **Sort-merge**: collect pairs, sort by group and merge (O(n log n))
//!
//! Status values keep their own numeric type throughout: `f64` inputs
//! accumulate as `f64`, `i32` as `i32`, and so on.
//!
//! ## Usage
//!
//! ```
//! use groupsum::{grouped_sum_indexed, grouped_sum_derived};
//!
//! let sums = grouped_sum_indexed(&[1, 2, 3, 4], &[0, 1, 0, 1], 2).unwrap();
//! assert_eq!(sums, vec![4, 6]);
//!
//! let sums = grouped_sum_derived(&[10.0, 20.0, 30.0], &[5.0, 5.0, 7.0]).unwrap();
//! assert_eq!(sums, vec![30.0, 30.0]);
//! ```
//!
//! Out-of-range group indices are governed by a single [`RangePolicy`]
//! shared by every strategy:
//!
//! ```
//! use groupsum::{grouped_sum, GroupSumConfig, GroupSumError, RangePolicy};
//!
//! let status = [1, 2, 3];
//! let group = [0, 1, 9];
//!
//! let strict = GroupSumConfig::default();
//! assert_eq!(
//!     grouped_sum(&status, &group, 2, &strict),
//!     Err(GroupSumError::GroupOutOfRange { position: 2, n_groups: 2 })
//! );
//!
//! let lenient = GroupSumConfig::default().with_range_policy(RangePolicy::Ignore);
//! assert_eq!(grouped_sum(&status, &group, 2, &lenient).unwrap(), vec![1, 2]);
//! ```

pub mod accumulator;
pub mod config;
pub mod error;
pub mod groups;
pub mod reference;
pub mod typed;
pub mod utils;
pub mod validate;

use num_traits::{Num, PrimInt};
use std::ops::AddAssign;
use tracing::debug;

// Re-export primary components
pub use accumulator::{Accumulator, DenseAccumulator, SortAccumulator};
pub use config::{GroupSumConfig, RangePolicy, Strategy};
pub use error::{GroupSumError, Result};
pub use groups::{sort_unique, GroupedSums};
pub use utils::{grouped_sum_array, grouped_totals_array};

/// Sums `status` by integer `group` using the strategy and range policy in `config`.
///
/// # Arguments
///
/// * `status` - Values to sum
/// * `group` - Group index of each status value, positionally aligned
/// * `n_groups` - Number of groups; the length of the result
/// * `config` - Strategy and out-of-range handling
///
/// # Returns
///
/// A vector of length `n_groups` whose entry `i` is the sum of every
/// `status[k]` with `group[k] == i`. Groups with no members are zero.
///
/// # Errors
///
/// * [`GroupSumError::LengthMismatch`] if the inputs differ in length
/// * [`GroupSumError::GroupOutOfRange`] if an index is negative or
///   `>= n_groups` and the policy is [`RangePolicy::Reject`]
pub fn grouped_sum<T, G>(
    status: &[T],
    group: &[G],
    n_groups: usize,
    config: &GroupSumConfig,
) -> Result<Vec<T>>
where
    T: Copy + Num + AddAssign,
    G: PrimInt,
{
    validate::check_lengths(status.len(), group.len())?;
    if config.range_policy == RangePolicy::Reject {
        validate::check_range(group, n_groups)?;
    }

    debug!(
        n = status.len(),
        n_groups,
        strategy = ?config.strategy,
        range_policy = ?config.range_policy,
        "indexed grouped sum"
    );

    let sums = match config.strategy {
        Strategy::Nested => reference::sum_by_group_nested(status, group, n_groups),
        Strategy::SinglePass => accumulator::sum_by_group_one_pass(status, group, n_groups),
        Strategy::SortMerge => accumulator::sum_by_group_sorted(status, group, n_groups),
    };

    Ok(sums)
}

/// Sums `status` by integer `group` with the nested loop.
///
/// Every index must lie in `[0, n_groups)`.
///
/// # Examples
///
/// ```
/// use groupsum::grouped_sum_indexed;
///
/// let sums = grouped_sum_indexed(&[1.5, 2.0, 0.5], &[1, 1, 0], 2).unwrap();
/// assert_eq!(sums, vec![0.5, 3.5]);
/// ```
pub fn grouped_sum_indexed<T, G>(status: &[T], group: &[G], n_groups: usize) -> Result<Vec<T>>
where
    T: Copy + Num + AddAssign,
    G: PrimInt,
{
    let config = GroupSumConfig::default().with_strategy(Strategy::Nested);
    grouped_sum(status, group, n_groups, &config)
}

/// Sums `status` by integer `group` in a single pass.
///
/// Produces the same result as [`grouped_sum_indexed`] in O(n).
pub fn grouped_sum_indexed_one_pass<T, G>(
    status: &[T],
    group: &[G],
    n_groups: usize,
) -> Result<Vec<T>>
where
    T: Copy + Num + AddAssign,
    G: PrimInt,
{
    let config = GroupSumConfig::default().with_strategy(Strategy::SinglePass);
    grouped_sum(status, group, n_groups, &config)
}

/// Single-pass grouped sum with no validation and no bounds checks.
///
/// # Safety
///
/// `status` must be at least as long as `group`, and every element of
/// `group` must lie in `[0, n_groups)`. Violating either is undefined
/// behavior.
pub unsafe fn grouped_sum_indexed_one_pass_unchecked<T, G>(
    status: &[T],
    group: &[G],
    n_groups: usize,
) -> Vec<T>
where
    T: Copy + Num + AddAssign,
    G: PrimInt,
{
    accumulator::sum_by_group_unchecked(status, group, n_groups)
}

/// Sums `status` by arbitrary `group` labels, returning labels and totals.
///
/// The labels are the sorted unique values of `group`. Label equality is
/// exact, with no tolerance for floating-point labels.
///
/// # Errors
///
/// * [`GroupSumError::LengthMismatch`] if the inputs differ in length
/// * [`GroupSumError::UnorderedLabel`] if a label cannot be ordered (NaN)
///
/// # Examples
///
/// ```
/// use groupsum::{grouped_totals, GroupSumConfig};
///
/// let totals = grouped_totals(&[10, 20, 30], &[5, 5, 7], &GroupSumConfig::default()).unwrap();
/// assert_eq!(totals.labels, vec![5, 7]);
/// assert_eq!(totals.sums, vec![30, 30]);
/// ```
pub fn grouped_totals<K, T>(
    status: &[T],
    group: &[K],
    config: &GroupSumConfig,
) -> Result<GroupedSums<K, T>>
where
    K: PartialOrd + Copy,
    T: Copy + Num + AddAssign,
{
    validate::check_lengths(status.len(), group.len())?;

    debug!(n = status.len(), strategy = ?config.strategy, "derived grouped sum");

    let totals = match config.strategy {
        Strategy::Nested => {
            let uniques = groups::sort_unique(group)?;
            let sums = reference::sum_by_label_nested(status, group, &uniques);
            GroupedSums::new(uniques, sums)
        }
        Strategy::SinglePass => {
            let uniques = groups::sort_unique(group)?;
            let indices = groups::encode(group, &uniques);
            let mut dense = DenseAccumulator::new(uniques.len());
            accumulator::accumulate_all(&mut dense, indices, status);
            GroupedSums::new(uniques, dense.into_values())
        }
        Strategy::SortMerge => {
            validate::check_orderable(group)?;
            let (labels, sums) = accumulator::sum_by_label_sorted(status, group);
            GroupedSums::new(labels, sums)
        }
    };

    debug!(n_groups = totals.len(), "derived groups");
    Ok(totals)
}

/// Sums `status` by arbitrary `group` labels with the nested scan.
///
/// Entry `i` of the result belongs to the `i`-th smallest unique label.
pub fn grouped_sum_derived<K, T>(status: &[T], group: &[K]) -> Result<Vec<T>>
where
    K: PartialOrd + Copy,
    T: Copy + Num + AddAssign,
{
    grouped_totals(status, group, &GroupSumConfig::naive()).map(GroupedSums::into_sums)
}

/// Version information for the groupsum library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
