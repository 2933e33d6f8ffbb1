//! Small convenience constructors for common schema types.

use pschema::{FunctionDescriptor, ParameterSet, Property, SchemaError, ToolDescriptor};

pub fn string_property(description: impl Into<String>) -> Result<Property, SchemaError> {
    Property::new("string", description)
}

pub fn integer_property(description: impl Into<String>) -> Result<Property, SchemaError> {
    Property::new("integer", description)
}

pub fn number_property(description: impl Into<String>) -> Result<Property, SchemaError> {
    Property::new("number", description)
}

pub fn boolean_property(description: impl Into<String>) -> Result<Property, SchemaError> {
    Property::new("boolean", description)
}

pub fn object_property(description: impl Into<String>) -> Result<Property, SchemaError> {
    Property::new("object", description)
}

/// An `"array"` property whose elements are described by `items`.
pub fn array_property(
    description: impl Into<String>,
    items: Property,
) -> Result<Property, SchemaError> {
    Ok(Property::new("array", description)?.with_items(items))
}

pub fn tool(
    name: impl Into<String>,
    description: impl Into<String>,
    parameters: ParameterSet,
) -> Result<ToolDescriptor, SchemaError> {
    ToolDescriptor::new(name, description, parameters)
}

/// Wraps a new tool description in the `{"function": ..., "type": "function"}` envelope.
pub fn function(
    name: impl Into<String>,
    description: impl Into<String>,
    parameters: ParameterSet,
) -> Result<FunctionDescriptor, SchemaError> {
    tool(name, description, parameters).map(FunctionDescriptor::new)
}
