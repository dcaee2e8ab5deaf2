//! Utility functions and helpers

pub mod formats;

pub use formats::{grouped_sum_array, grouped_totals_array};

use std::borrow::Cow;

use ndarray::ArrayView1;

/// Borrow the elements of a view as a slice, copying only if it is strided
pub fn contiguous<'a, T: Clone>(view: &'a ArrayView1<'_, T>) -> Cow<'a, [T]> {
    match view.as_slice() {
        Some(slice) => Cow::Borrowed(slice),
        None => Cow::Owned(view.to_vec()),
    }
}
