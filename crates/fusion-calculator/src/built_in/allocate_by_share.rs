//! Allocate By Share Calculator
//!
//! Distributes a whole-number `total` across `rows` by each row's percentage
//! share using the largest-remainder method. The counts always sum to `total`.

use std::collections::HashMap;

use fusion_types::{FieldValue, Record};

use crate::allocation::allocate_by_share;
use crate::plugin::{CalculationResult, CalculatorPlugin, records_arg, string_arg_or, total_arg};

/// # Arguments
/// * `total` - Whole-number total to distribute
/// * `rows` - Array of objects, each carrying a numeric share
/// * `share_key` - Field to read the share from (default `sharePct`)
/// * `out_key` - Field to write the count to (default `count`)
///
/// # Returns
/// The rows, in input order, with `out_key` set to an integer count
#[derive(Debug, Default)]
pub struct AllocateByShareCalculator;

impl CalculatorPlugin for AllocateByShareCalculator {
    fn name(&self) -> &str {
        "allocate_by_share"
    }

    fn calculate(&self, args: &HashMap<String, &FieldValue>) -> CalculationResult {
        let total = total_arg(args, "total")?;
        let rows = records_arg(args, "rows")?;
        let share_key = string_arg_or(args, "share_key", "sharePct")?;
        let out_key = string_arg_or(args, "out_key", "count")?;

        let allocated = allocate_by_share(total, &rows, share_key, out_key)?;
        Ok(FieldValue::Array(allocated.into_iter().map(Record::into_value).collect()))
    }
}
