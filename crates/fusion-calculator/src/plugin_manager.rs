use crate::plugin::CalculatorPlugin;
use std::collections::BTreeMap;

/// Calculators keyed by [`CalculatorPlugin::name`], kept in name order
#[derive(Default)]
pub struct PluginManager {
    plugins: BTreeMap<String, Box<dyn CalculatorPlugin>>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a calculator, returning the one it replaced if the name was taken
    pub fn register(
        &mut self,
        plugin: Box<dyn CalculatorPlugin>,
    ) -> Option<Box<dyn CalculatorPlugin>> {
        self.plugins.insert(plugin.name().to_string(), plugin)
    }

    pub fn get(&self, name: &str) -> Option<&dyn CalculatorPlugin> {
        self.plugins.get(name).map(AsRef::as_ref)
    }

    pub fn names(&self) -> Vec<&str> {
        self.plugins.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
