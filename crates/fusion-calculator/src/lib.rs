#![deny(warnings)]
//! Headcount calculators for the Fusion dashboard.
//!
//! The heart of this crate is [`allocate_counts`]: it turns percentage shares
//! into whole-number counts that add up to the requested total exactly, using
//! the largest-remainder method. [`split_by_percentage`] and
//! [`normalize_shares`] are the two helpers that sit either side of it.
//!
//! The same operations are also reachable by name through [`Calculator`],
//! which takes and returns [`FieldValue`]s so that the HTTP layer can invoke
//! them from JSON.

pub mod allocation;
pub mod built_in;
pub mod calculator;
pub mod error;
pub mod normalize;
pub mod plugin;
pub mod plugin_manager;
pub mod split;

pub use allocation::{
    Allocation, MAX_TOTAL, Share, allocate, allocate_by_share, allocate_counts, total_from_value,
};
pub use built_in::average::mean;
pub use calculator::Calculator;
pub use error::AllocationError;
pub use plugin::{CalculationResult, CalculatorError, CalculatorPlugin};
pub use fusion_types::{FieldValue, Record};
pub use normalize::{apportion_share_list, normalize_records, normalize_share_list, normalize_shares};
pub use split::{BinarySplit, split_by_percentage};
