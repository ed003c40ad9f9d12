use crate::FieldValue;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named-field row, e.g. `{ team: "Ops", sharePct: 26 }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Field values keyed by field name
    pub fields: HashMap<String, FieldValue>,
}

impl Record {
    /// Creates an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Looks up a field
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Sets (or overwrites) a field
    pub fn set(&mut self, key: &str, value: impl Into<FieldValue>) {
        self.fields.insert(key.to_string(), value.into());
    }

    /// Numeric field as `f64`, `None` if absent or not a number
    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(FieldValue::as_f64)
    }

    /// Consumes the record into a `FieldValue::Object`
    #[must_use]
    pub fn into_value(self) -> FieldValue {
        FieldValue::Object(self.fields)
    }
}

impl From<HashMap<String, FieldValue>> for Record {
    fn from(fields: HashMap<String, FieldValue>) -> Self {
        Self { fields }
    }
}

impl TryFrom<&FieldValue> for Record {
    type Error = anyhow::Error;

    fn try_from(value: &FieldValue) -> Result<Self> {
        match value {
            FieldValue::Object(map) => Ok(Self { fields: map.clone() }),
            other => Err(anyhow!("expected an object, found {}", other.type_name())),
        }
    }
}
