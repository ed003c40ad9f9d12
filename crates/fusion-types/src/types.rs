use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::HashMap;
use std::fmt;

/// A single dynamically typed value held by a [`crate::Record`] field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FieldValue {
    /// UTF-8 text
    String(String),
    /// Whole number; JSON integers land here
    Integer(i64),
    /// Any other JSON number
    Float(f64),
    /// `true` / `false`
    Boolean(bool),
    /// Ordered list
    Array(Vec<FieldValue>),
    /// Nested record
    Object(HashMap<String, FieldValue>),
    /// Absent value
    Null,
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::String(text) => Value::String(text),
            FieldValue::Integer(n) => Value::Number(Number::from(n)),
            // JSON has no NaN or infinity
            FieldValue::Float(x) => Number::from_f64(x).map_or(Value::Null, Value::Number),
            FieldValue::Boolean(flag) => Value::Bool(flag),
            FieldValue::Array(items) => items.into_iter().map(Value::from).collect(),
            FieldValue::Object(fields) => {
                Value::Object(fields.into_iter().map(|(key, field)| (key, field.into())).collect::<Map<_, _>>())
            }
            FieldValue::Null => Value::Null,
        }
    }
}

impl From<&FieldValue> for Value {
    fn from(value: &FieldValue) -> Self {
        Value::from(value.clone())
    }
}

impl TryFrom<&Value> for FieldValue {
    type Error = anyhow::Error;

    fn try_from(value: &Value) -> Result<Self> {
        let converted = match value {
            Value::Null => FieldValue::Null,
            Value::Bool(flag) => FieldValue::Boolean(*flag),
            Value::String(text) => FieldValue::String(text.clone()),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(whole), _) => FieldValue::Integer(whole),
                (None, Some(x)) => FieldValue::Float(x),
                (None, None) => bail!("number {n} does not fit an i64 or f64"),
            },
            Value::Array(items) => {
                FieldValue::Array(items.iter().map(FieldValue::try_from).collect::<Result<_>>()?)
            }
            Value::Object(fields) => FieldValue::Object(
                fields
                    .iter()
                    .map(|(key, field)| Ok((key.clone(), FieldValue::try_from(field)?)))
                    .collect::<Result<_>>()?,
            ),
        };
        Ok(converted)
    }
}

fn write_joined<'a, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator<Item = (Option<&'a str>, &'a FieldValue)>,
{
    for (n, (key, item)) in items.into_iter().enumerate() {
        if n > 0 {
            f.write_str(", ")?;
        }
        if let Some(key) = key {
            write!(f, "{key}: ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(text) => f.write_str(text),
            FieldValue::Integer(n) => fmt::Display::fmt(n, f),
            FieldValue::Float(x) => fmt::Display::fmt(x, f),
            FieldValue::Boolean(flag) => fmt::Display::fmt(flag, f),
            FieldValue::Null => f.write_str("null"),
            FieldValue::Array(items) => {
                f.write_str("[")?;
                write_joined(f, items.iter().map(|item| (None, item)))?;
                f.write_str("]")
            }
            FieldValue::Object(fields) => {
                let mut sorted: Vec<_> = fields.iter().collect();
                sorted.sort_by(|a, b| a.0.cmp(b.0));
                f.write_str("{")?;
                write_joined(f, sorted.into_iter().map(|(key, item)| (Some(key.as_str()), item)))?;
                f.write_str("}")
            }
        }
    }
}

impl FieldValue {
    /// Variant name used in error messages
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            FieldValue::String(_) => "string",
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Array(_) => "array",
            FieldValue::Object(_) => "object",
            FieldValue::Null => "null",
        }
    }

    /// Numeric view of `Integer` and `Float`; `None` for everything else
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match *self {
            FieldValue::Integer(n) => Some(n as f64),
            FieldValue::Float(x) => Some(x),
            _ => None,
        }
    }

    /// Borrowed text of a `String` value
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let FieldValue::String(text) = self { Some(text) } else { None }
    }
}

macro_rules! field_value_from {
    ($($source:ty => $variant:ident($convert:expr)),* $(,)?) => {
        $(
            impl From<$source> for FieldValue {
                fn from(value: $source) -> Self {
                    FieldValue::$variant($convert(value))
                }
            }
        )*
    };
}

field_value_from! {
    &str => String(str::to_owned),
    String => String(std::convert::identity),
    i64 => Integer(std::convert::identity),
    u32 => Integer(i64::from),
    f64 => Float(std::convert::identity),
    bool => Boolean(std::convert::identity),
}
