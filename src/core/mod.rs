//! Derived list views: versioned buffer, filter stage, and group aggregator.

/// Cargo filter stage and filter-menu helpers.
pub mod filter;
/// Shared-orders and singleton grouping.
pub mod grouping;
/// Versioned vehicle buffer, group ranges, and group views.
pub mod list;
