//! Grouped sums over `ndarray` vectors

use ndarray::{Array1, ArrayView1};
use num_traits::{Num, PrimInt};
use std::ops::AddAssign;

use crate::config::GroupSumConfig;
use crate::error::Result;
use crate::utils::contiguous;

/// Indexed grouped sum over one-dimensional array views
///
/// Strided views are copied to contiguous storage first; contiguous views
/// are summed in place.
pub fn grouped_sum_array<T, G>(
    status: ArrayView1<'_, T>,
    group: ArrayView1<'_, G>,
    n_groups: usize,
    config: &GroupSumConfig,
) -> Result<Array1<T>>
where
    T: Copy + Num + AddAssign,
    G: PrimInt,
{
    let status = contiguous(&status);
    let group = contiguous(&group);

    crate::grouped_sum(&*status, &*group, n_groups, config).map(Array1::from)
}

/// Derived grouped sum over one-dimensional array views
///
/// # Returns
///
/// A tuple of `(labels, sums)` with labels ascending.
pub fn grouped_totals_array<K, T>(
    status: ArrayView1<'_, T>,
    group: ArrayView1<'_, K>,
    config: &GroupSumConfig,
) -> Result<(Array1<K>, Array1<T>)>
where
    K: PartialOrd + Copy,
    T: Copy + Num + AddAssign,
{
    let status = contiguous(&status);
    let group = contiguous(&group);

    let totals = crate::grouped_totals(&*status, &*group, config)?;
    Ok((Array1::from(totals.labels), Array1::from(totals.sums)))
}
