//! Common imports for most parsely applications.

pub use crate::{
    array_property, boolean_property, function, integer_property, number_property,
    object_property, observed_toolbox, observed_toolbox_with, string_property, tool,
};
pub use crate::{ps_args, ps_params};
pub use crate::{
    AbortError, FunctionDescriptor, FunctionTool, LifeCycle, LifeCycleHandler, ParameterSet,
    PlainData, Property, Props, SchemaError, Tool, ToolBox, ToolCallHooks, ToolContext,
    ToolDescriptor, ToolDispatch, ToolError, ToolErrorKind, ToolRegistry, to_plain_data,
};
