use crate::built_in::{
    allocate_by_share::AllocateByShareCalculator, average::AverageCalculator,
    binary_split::BinarySplitCalculator, normalize_shares::NormalizeSharesCalculator,
};
use crate::plugin::{CalculationResult, CalculatorError};
use crate::plugin_manager::PluginManager;
use fusion_types::FieldValue;
use std::collections::HashMap;

/// Name-addressed front door to the built-in calculators
pub struct Calculator {
    plugin_manager: PluginManager,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        let mut plugin_manager = PluginManager::new();
        plugin_manager.register(Box::new(AllocateByShareCalculator));
        plugin_manager.register(Box::new(AverageCalculator));
        plugin_manager.register(Box::new(BinarySplitCalculator));
        plugin_manager.register(Box::new(NormalizeSharesCalculator));
        Self { plugin_manager }
    }

    pub fn calculate(
        &self,
        calculator_name: &str,
        args: &HashMap<String, &FieldValue>,
    ) -> CalculationResult {
        if let Some(plugin) = self.plugin_manager.get(calculator_name) {
            plugin.calculate(args)
        } else {
            Err(CalculatorError::NotFound(calculator_name.to_string()))
        }
    }

    pub fn has(&self, calculator_name: &str) -> bool {
        self.plugin_manager.get(calculator_name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.plugin_manager.names()
    }
}
