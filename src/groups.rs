//! Group label normalization
//!
//! Arbitrary labels are turned into dense indices by sorting them,
//! collapsing adjacent duplicates, and looking each label up by binary
//! search. The ascending order of the unique labels is part of every
//! derived result.

use num_traits::Num;
use std::cmp::Ordering;
use std::ops::AddAssign;

use crate::error::Result;
use crate::validate::check_orderable;

/// Sorted unique set of `labels`
///
/// Equality is exact; `0.0` and `-0.0` collapse into one label.
///
/// # Errors
///
/// [`GroupSumError::UnorderedLabel`](crate::GroupSumError::UnorderedLabel)
/// if any label cannot be ordered (e.g. NaN).
pub fn sort_unique<K>(labels: &[K]) -> Result<Vec<K>>
where
    K: PartialOrd + Copy,
{
    check_orderable(labels)?;

    let mut uniques = labels.to_vec();
    uniques.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    uniques.dedup();
    Ok(uniques)
}

/// Position of each label within `uniques`
///
/// `uniques` must be sorted ascending and contain every label, as produced
/// by [`sort_unique`]. Labels not found map to `uniques.len()`, one past
/// the last group.
pub fn encode<K>(labels: &[K], uniques: &[K]) -> Vec<usize>
where
    K: PartialOrd + Copy,
{
    labels
        .iter()
        .map(|label| {
            uniques
                .binary_search_by(|u| u.partial_cmp(label).unwrap_or(Ordering::Less))
                .unwrap_or(uniques.len())
        })
        .collect()
}

/// Per-group totals together with the label each total belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSums<K, T> {
    /// Unique labels, ascending
    pub labels: Vec<K>,
    /// `sums[i]` is the total for `labels[i]`
    pub sums: Vec<T>,
}

impl<K, T> GroupedSums<K, T>
where
    K: PartialOrd + Copy,
    T: Copy + Num + AddAssign,
{
    pub fn new(labels: Vec<K>, sums: Vec<T>) -> Self {
        debug_assert_eq!(labels.len(), sums.len());
        Self { labels, sums }
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Total for `label`, if it occurred in the input
    pub fn get(&self, label: &K) -> Option<T> {
        self.labels
            .binary_search_by(|u| u.partial_cmp(label).unwrap_or(Ordering::Less))
            .ok()
            .map(|i| self.sums[i])
    }

    /// Iterate over `(label, total)` pairs in ascending label order
    pub fn iter(&self) -> impl Iterator<Item = (K, T)> + '_ {
        self.labels.iter().copied().zip(self.sums.iter().copied())
    }

    /// Sum of all group totals
    pub fn total(&self) -> T {
        let mut total = T::zero();
        for &s in &self.sums {
            total += s;
        }
        total
    }

    /// Drop the labels and keep only the totals
    pub fn into_sums(self) -> Vec<T> {
        self.sums
    }
}
