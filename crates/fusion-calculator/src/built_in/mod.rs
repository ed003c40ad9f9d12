//! Built-in calculators exposed through [`crate::Calculator`].

// Allocation calculators
pub mod allocate_by_share;
pub mod binary_split;
pub mod normalize_shares;

// Aggregates
pub mod average;
