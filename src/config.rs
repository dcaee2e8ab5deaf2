//! Configuration for grouped summation

/// Reduction strategy used to fold status values into group totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Outer loop over groups, inner loop over every element: O(n_groups * n)
    Nested,
    /// One pass over the elements into a dense per-group array: O(n)
    SinglePass,
    /// Collect (group, value) pairs, sort by group and merge duplicates: O(n log n)
    SortMerge,
}

impl Strategy {
    /// All strategies, in the order they are usually compared
    pub const ALL: [Strategy; 3] = [Strategy::Nested, Strategy::SinglePass, Strategy::SortMerge];
}

/// What to do with a group index outside `[0, n_groups)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePolicy {
    /// Fail with [`GroupSumError::GroupOutOfRange`](crate::GroupSumError::GroupOutOfRange)
    Reject,
    /// Drop the offending element; it contributes to no group
    Ignore,
}

/// Configuration for the config-driven entry points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSumConfig {
    /// Reduction strategy
    pub strategy: Strategy,

    /// Handling of out-of-range group indices, applied identically by every strategy
    pub range_policy: RangePolicy,
}

impl Default for GroupSumConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::SinglePass,
            range_policy: RangePolicy::Reject,
        }
    }
}

impl GroupSumConfig {
    /// Nested loop that silently skips out-of-range indices
    pub fn naive() -> Self {
        Self {
            strategy: Strategy::Nested,
            range_policy: RangePolicy::Ignore,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_range_policy(mut self, range_policy: RangePolicy) -> Self {
        self.range_policy = range_policy;
        self
    }
}
