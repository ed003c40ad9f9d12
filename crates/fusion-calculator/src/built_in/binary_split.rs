//! Calculator splitting a total into a primary part and the residual
//!
//! For example 101 people at 74% employees gives 74 employees and 27
//! contractors.

use std::collections::HashMap;

use fusion_types::FieldValue;

use crate::plugin::{CalculationResult, CalculatorPlugin, number_arg, total_arg};
use crate::split::split_by_percentage;

/// # Arguments
/// * `total` - Whole-number total
/// * `primary_pct` - Percentage (0-100) of the total that is primary
///
/// # Returns
/// An object `{ primary, secondary }` of integers
#[derive(Debug, Default)]
pub struct BinarySplitCalculator;

impl CalculatorPlugin for BinarySplitCalculator {
    fn name(&self) -> &str {
        "binary_split"
    }

    fn calculate(&self, args: &HashMap<String, &FieldValue>) -> CalculationResult {
        let total = total_arg(args, "total")?;
        let primary_pct = number_arg(args, "primary_pct")?;

        let split = split_by_percentage(total, primary_pct);
        let mut out = HashMap::with_capacity(2);
        // Both parts are <= total, which came from an i64
        out.insert("primary".to_string(), FieldValue::Integer(split.primary as i64));
        out.insert("secondary".to_string(), FieldValue::Integer(split.secondary as i64));
        Ok(FieldValue::Object(out))
    }
}
