//! Calculator rescaling row shares so they sum to 100

use std::collections::HashMap;

use fusion_types::{FieldValue, Record};

use crate::normalize::normalize_records;
use crate::plugin::{CalculationResult, CalculatorPlugin, records_arg, string_arg_or};

/// # Arguments
/// * `rows` - Array of objects, each carrying a numeric share
/// * `share_key` - Field holding the share (default `sharePct`)
#[derive(Debug, Default)]
pub struct NormalizeSharesCalculator;

impl CalculatorPlugin for NormalizeSharesCalculator {
    fn name(&self) -> &str {
        "normalize_shares"
    }

    fn calculate(&self, args: &HashMap<String, &FieldValue>) -> CalculationResult {
        let rows = records_arg(args, "rows")?;
        let share_key = string_arg_or(args, "share_key", "sharePct")?;

        let normalized = normalize_records(&rows, share_key)?;
        Ok(FieldValue::Array(normalized.into_iter().map(Record::into_value).collect()))
    }
}
