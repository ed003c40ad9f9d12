use crate::allocation::total_from_value;
use crate::error::AllocationError;
use fusion_types::{FieldValue, Record};
use std::collections::HashMap;
use thiserror::Error;

/// Why a calculator call failed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    /// An argument was missing or had the wrong shape
    #[error("Invalid argument '{name}': expected {expected}")]
    InvalidArgument { name: String, expected: &'static str },

    /// No calculator is registered under the name
    #[error("calculator '{0}' not found")]
    NotFound(String),

    /// Well-formed arguments the allocator could not work with
    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

impl CalculatorError {
    pub fn invalid_argument(name: &str, expected: &'static str) -> Self {
        Self::InvalidArgument { name: name.to_string(), expected }
    }
}

pub type CalculationResult = Result<FieldValue, CalculatorError>;

/// A trait for calculator plugins.
pub trait CalculatorPlugin: Send + Sync {
    /// The name of the calculator.
    fn name(&self) -> &str;

    /// Performs the calculation.
    fn calculate(&self, args: &HashMap<String, &FieldValue>) -> CalculationResult;
}

/// Required numeric argument
pub(crate) fn number_arg(args: &HashMap<String, &FieldValue>, name: &str) -> Result<f64, CalculatorError> {
    args.get(name)
        .and_then(|value| value.as_f64())
        .ok_or_else(|| CalculatorError::invalid_argument(name, "number"))
}

/// Required whole-number total; shape errors are argument errors, values the
/// allocator rejects (negative, fractional) are allocation errors
pub(crate) fn total_arg(args: &HashMap<String, &FieldValue>, name: &str) -> Result<u64, CalculatorError> {
    match args.get(name).copied() {
        Some(value) if value.as_f64().is_some() => Ok(total_from_value(value)?),
        _ => Err(CalculatorError::invalid_argument(name, "number")),
    }
}

/// Optional string argument, falling back to `default`
pub(crate) fn string_arg_or<'a>(
    args: &'a HashMap<String, &FieldValue>,
    name: &str,
    default: &'a str,
) -> Result<&'a str, CalculatorError> {
    match args.get(name) {
        None | Some(FieldValue::Null) => Ok(default),
        Some(FieldValue::String(s)) => Ok(s.as_str()),
        Some(_) => Err(CalculatorError::invalid_argument(name, "string")),
    }
}

/// Required array-of-objects argument
pub(crate) fn records_arg(
    args: &HashMap<String, &FieldValue>,
    name: &str,
) -> Result<Vec<Record>, CalculatorError> {
    const EXPECTED: &str = "an array of objects";
    match args.get(name) {
        Some(FieldValue::Array(items)) => items
            .iter()
            .map(|item| Record::try_from(item).map_err(|_| CalculatorError::invalid_argument(name, EXPECTED)))
            .collect(),
        _ => Err(CalculatorError::invalid_argument(name, EXPECTED)),
    }
}
