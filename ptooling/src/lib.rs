//! Capability layer for dispatching named tool calls and tracking run completion.

mod args;
mod dispatch;
mod error;
mod hooks;
mod lifecycle;
mod registry;
mod tool;
mod toolbox;

pub mod prelude {
    pub use crate::{
        AbortError, FunctionTool, LifeCycle, LifeCycleHandler, Tool, ToolBox, ToolCallHooks,
        ToolContext, ToolDispatch, ToolError, ToolErrorKind, ToolRegistry,
    };
}

pub use args::{
    check_arguments, optional_string, parse_fenced_json, parse_json_object, parse_json_value,
    required_bool, required_f64, required_i64, required_string,
};
pub use dispatch::ToolDispatch;
pub use error::{AbortError, ToolError, ToolErrorKind, error_message, is_error_value};
pub use hooks::{NoopToolCallHooks, ToolCallHooks};
pub use lifecycle::{LifeCycle, LifeCycleHandler};
pub use registry::ToolRegistry;
pub use tool::{FunctionTool, Tool, ToolContext};
pub use toolbox::{ABORT_TOOL, COMPLETE_TOOL, INCOMPLETE_TOOL, ToolBox};
