//! Tool description value objects.
//!
//! ```rust
//! use pschema::{ParameterSet, Property, ToolDescriptor};
//!
//! let parameters = ParameterSet::builder()
//!     .required("path", Property::new("string", "File to read")?)
//!     .optional("limit", Property::new("integer", "Maximum bytes to return")?)
//!     .build();
//!
//! let tool = ToolDescriptor::new("read_file", "Reads a file from the workspace", parameters)?;
//! let function = tool.into_function();
//!
//! assert_eq!(function.function().name(), "read_file");
//! assert_eq!(function.function().parameters().required(), ["path"]);
//! # Ok::<(), pschema::SchemaError>(())
//! ```

use pcommon::Registry;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::SchemaError;

/// Upper bound, in characters, for property and tool descriptions.
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;

fn validate_description(description: String) -> Result<String, SchemaError> {
    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(SchemaError::description_too_long(length, &description));
    }
    Ok(description)
}

/// Marker serialized as the `type` of a [`ParameterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParametersKind {
    #[default]
    Object,
}

impl ParametersKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
        }
    }
}

/// Marker serialized as the `type` of a [`FunctionDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    #[default]
    Function,
}

impl FunctionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Function => "function",
        }
    }
}

/// One parameter of a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PropertyFields")]
pub struct Property {
    #[serde(rename = "type")]
    kind: String,
    description: String,
    items: Option<Value>,
}

#[derive(Deserialize)]
struct PropertyFields {
    #[serde(rename = "type")]
    kind: String,
    description: String,
    #[serde(default)]
    items: Option<Value>,
}

impl TryFrom<PropertyFields> for Property {
    type Error = SchemaError;

    fn try_from(fields: PropertyFields) -> Result<Self, Self::Error> {
        let property = Self::new(fields.kind, fields.description)?;
        Ok(match fields.items {
            Some(items) => property.with_items(items),
            None => property,
        })
    }
}

impl Property {
    /// Fails when `description` is longer than [`MAX_DESCRIPTION_LENGTH`] characters.
    pub fn new(
        kind: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, SchemaError> {
        Ok(Self {
            kind: kind.into(),
            description: validate_description(description.into())?,
            items: None,
        })
    }

    /// Sets the element schema, typically for `array` properties.
    pub fn with_items(mut self, items: impl Into<Value>) -> Self {
        self.items = Some(items.into());
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn items(&self) -> Option<&Value> {
        self.items.as_ref()
    }
}

impl From<Property> for Value {
    fn from(property: Property) -> Self {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String(property.kind));
        map.insert("description".to_string(), Value::String(property.description));
        if let Some(items) = property.items {
            map.insert("items".to_string(), items);
        }
        Value::Object(map)
    }
}

/// Parameter signature of a tool.
///
/// `required` is not checked against `properties` here; see
/// [`ParameterSet::missing_required`] and [`ParameterSet::builder`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParameterSet {
    #[serde(default)]
    required: Vec<String>,
    #[serde(default)]
    properties: Registry<String, Property>,
    #[serde(rename = "type", default)]
    kind: ParametersKind,
}

impl ParameterSet {
    pub fn new<R, N, P>(required: R, properties: P) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        P: IntoIterator<Item = (N, Property)>,
        N: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
            properties: properties
                .into_iter()
                .map(|(name, property)| (name.into(), property))
                .collect(),
            kind: ParametersKind::Object,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> ParameterSetBuilder {
        ParameterSetBuilder::default()
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn properties(&self) -> &Registry<String, Property> {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    pub fn kind(&self) -> ParametersKind {
        self.kind
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|required| required == name)
    }

    /// Names listed in `required` that have no matching property.
    pub fn missing_required(&self) -> Vec<&str> {
        self.required
            .iter()
            .filter(|name| !self.properties.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }
}

/// Builds a [`ParameterSet`] whose `required` names always have a property.
#[derive(Debug, Default)]
pub struct ParameterSetBuilder {
    required: Vec<String>,
    properties: Registry<String, Property>,
}

impl ParameterSetBuilder {
    #[must_use]
    pub fn required(self, name: impl Into<String>, property: Property) -> Self {
        self.property(name, property, true)
    }

    #[must_use]
    pub fn optional(self, name: impl Into<String>, property: Property) -> Self {
        self.property(name, property, false)
    }

    #[must_use]
    pub fn property(mut self, name: impl Into<String>, property: Property, required: bool) -> Self {
        let name = name.into();
        if required && !self.required.contains(&name) {
            self.required.push(name.clone());
        }
        if !required {
            self.required.retain(|existing| existing != &name);
        }
        self.properties.insert(name, property);
        self
    }

    #[must_use]
    pub fn build(self) -> ParameterSet {
        ParameterSet {
            required: self.required,
            properties: self.properties,
            kind: ParametersKind::Object,
        }
    }
}

/// A named, described, invocable tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ToolDescriptorFields")]
pub struct ToolDescriptor {
    name: String,
    description: String,
    parameters: ParameterSet,
}

#[derive(Deserialize)]
struct ToolDescriptorFields {
    name: String,
    description: String,
    #[serde(default)]
    parameters: ParameterSet,
}

impl TryFrom<ToolDescriptorFields> for ToolDescriptor {
    type Error = SchemaError;

    fn try_from(fields: ToolDescriptorFields) -> Result<Self, Self::Error> {
        Self::new(fields.name, fields.description, fields.parameters)
    }
}

impl ToolDescriptor {
    /// Fails when `description` is longer than [`MAX_DESCRIPTION_LENGTH`] characters.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: ParameterSet,
    ) -> Result<Self, SchemaError> {
        Ok(Self {
            name: name.into(),
            description: validate_description(description.into())?,
            parameters,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn into_function(self) -> FunctionDescriptor {
        FunctionDescriptor::new(self)
    }
}

/// Top-level `{"function": ..., "type": "function"}` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    function: ToolDescriptor,
    #[serde(rename = "type", default)]
    kind: FunctionKind,
}

impl FunctionDescriptor {
    pub fn new(function: ToolDescriptor) -> Self {
        Self {
            function,
            kind: FunctionKind::Function,
        }
    }

    pub fn function(&self) -> &ToolDescriptor {
        &self.function
    }

    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    pub fn into_tool(self) -> ToolDescriptor {
        self.function
    }
}

impl From<ToolDescriptor> for FunctionDescriptor {
    fn from(function: ToolDescriptor) -> Self {
        Self::new(function)
    }
}
