//! Conversion of schema values into pruned plain JSON mappings.
//!
//! ```rust
//! use pschema::{ParameterSet, PlainData, Property, ToolDescriptor};
//!
//! let tool = ToolDescriptor::new(
//!     "ping",
//!     "Checks connectivity",
//!     ParameterSet::builder()
//!         .required("host", Property::new("string", "Host to ping")?)
//!         .build(),
//! )?;
//!
//! let plain = tool.into_function().to_plain_data()?;
//! assert_eq!(plain["type"], "function");
//! assert!(plain["function"]["parameters"]["properties"]["host"].get("items").is_none());
//! # Ok::<(), pschema::SchemaError>(())
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::SchemaError;

/// Serializes `value` and removes every `null`-valued key at any depth.
pub fn to_plain_data<T>(value: &T) -> Result<Map<String, Value>, SchemaError>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(value)
        .map_err(|err| SchemaError::serialization(format!("failed to serialize value: {err}")))?;

    match prune_nulls(value) {
        Value::Object(map) => Ok(map),
        other => Err(SchemaError::serialization(format!(
            "expected a mapping, found {}",
            value_kind(&other)
        ))),
    }
}

/// Drops `null` object entries recursively, descending through arrays.
///
/// `null` array elements are positional data and are kept.
pub fn prune_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key, prune_nulls(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(prune_nulls).collect()),
        other => other,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Method form of [`to_plain_data`] for any serializable value.
pub trait PlainData: Serialize {
    fn to_plain_data(&self) -> Result<Map<String, Value>, SchemaError> {
        to_plain_data(self)
    }
}

impl<T> PlainData for T where T: Serialize + ?Sized {}
