//! A calculator for the arithmetic mean of a list of numbers.

use std::collections::HashMap;

use fusion_types::FieldValue;

use crate::plugin::{CalculationResult, CalculatorError, CalculatorPlugin};

/// Mean of `values`, or 0 for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// # Expected Inputs
/// - `values`: An array of numbers.
///
/// # Output
/// The mean as a float; 0.0 when `values` is empty.
#[derive(Debug, Default)]
pub struct AverageCalculator;

impl CalculatorPlugin for AverageCalculator {
    fn name(&self) -> &str {
        "average"
    }

    fn calculate(&self, args: &HashMap<String, &FieldValue>) -> CalculationResult {
        let invalid = || CalculatorError::invalid_argument("values", "an array of numbers");
        let Some(FieldValue::Array(items)) = args.get("values") else {
            return Err(invalid());
        };

        let values = items
            .iter()
            .map(|item| item.as_f64().ok_or_else(invalid))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FieldValue::Float(mean(&values)))
    }
}
