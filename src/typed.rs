//! Monomorphic entry points for hosts that bind concrete numeric types
//!
//! Each function fixes the status and group types of one of the generic
//! routines. Floating-point status accumulates as `f64`, integer status as
//! its own integer width.

use crate::error::Result;

/// Floating-point status grouped by floating-point labels, ascending label order
pub fn grouped_sum_derived_f64(status: &[f64], group: &[f64]) -> Result<Vec<f64>> {
    crate::grouped_sum_derived(status, group)
}

/// Floating-point status grouped by `i32` indices, nested loop
pub fn grouped_sum_indexed_f64(status: &[f64], group: &[i32], n_groups: usize) -> Result<Vec<f64>> {
    crate::grouped_sum_indexed(status, group, n_groups)
}

/// `i32` status grouped by `i32` indices, nested loop
pub fn grouped_sum_indexed_i32(status: &[i32], group: &[i32], n_groups: usize) -> Result<Vec<i32>> {
    crate::grouped_sum_indexed(status, group, n_groups)
}

/// `i32` status grouped by `i32` indices, single pass
pub fn grouped_sum_one_pass_i32(
    status: &[i32],
    group: &[i32],
    n_groups: usize,
) -> Result<Vec<i32>> {
    crate::grouped_sum_indexed_one_pass(status, group, n_groups)
}

/// `i64` status grouped by `i64` indices, single pass
pub fn grouped_sum_one_pass_i64(
    status: &[i64],
    group: &[i64],
    n_groups: usize,
) -> Result<Vec<i64>> {
    crate::grouped_sum_indexed_one_pass(status, group, n_groups)
}
