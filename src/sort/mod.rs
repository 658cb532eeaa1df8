//! Sort stage: comparators, the static criterion registry, and the dirty-tracked sorter.

/// Comparator keys.
pub mod criteria;
/// Criterion tables keyed by grouping mode and time display.
pub mod registry;
/// Stable sorter with dirty tracking.
pub mod stage;
