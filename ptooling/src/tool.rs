//! Tool trait contract and the context handed to each call.
//!
//! ```rust
//! use pschema::{ParameterSet, Property, ToolDescriptor};
//! use ptooling::{FunctionTool, Tool, required_string};
//! use serde_json::Value;
//!
//! let descriptor = ToolDescriptor::new(
//!     "echo",
//!     "Echoes input",
//!     ParameterSet::builder()
//!         .required("text", Property::new("string", "Text to echo")?)
//!         .build(),
//! )?;
//!
//! let tool = FunctionTool::new(descriptor, |_ctx, args| {
//!     Ok(Value::String(required_string(&args, "text")?))
//! });
//!
//! assert_eq!(tool.descriptor().name(), "echo");
//! # Ok::<(), pschema::SchemaError>(())
//! ```

use std::sync::Arc;

use pcommon::Props;
use pschema::ToolDescriptor;
use serde_json::{Map, Value};

use crate::{LifeCycle, LifeCycleHandler, ToolError};

/// Per-call view of the owning tool box: its props and its lifecycle.
pub struct ToolContext<'a> {
    props: &'a Props,
    lifecycle: &'a mut LifeCycle,
}

impl<'a> ToolContext<'a> {
    pub fn new(props: &'a Props, lifecycle: &'a mut LifeCycle) -> Self {
        Self { props, lifecycle }
    }

    pub fn props(&self) -> &Props {
        self.props
    }

    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }
}

impl LifeCycleHandler for ToolContext<'_> {
    fn lifecycle(&self) -> &LifeCycle {
        &*self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut LifeCycle {
        &mut *self.lifecycle
    }
}

pub trait Tool: Send + Sync {
    fn descriptor(&self) -> &ToolDescriptor;

    fn call(
        &self,
        context: &mut ToolContext<'_>,
        args: Map<String, Value>,
    ) -> Result<Value, ToolError>;
}

type ToolHandler =
    dyn Fn(&mut ToolContext<'_>, Map<String, Value>) -> Result<Value, ToolError> + Send + Sync;

pub struct FunctionTool {
    descriptor: ToolDescriptor,
    handler: Arc<ToolHandler>,
}

impl FunctionTool {
    pub fn new<F>(descriptor: ToolDescriptor, handler: F) -> Self
    where
        F: Fn(&mut ToolContext<'_>, Map<String, Value>) -> Result<Value, ToolError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            descriptor,
            handler: Arc::new(handler),
        }
    }
}

impl Tool for FunctionTool {
    fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    fn call(
        &self,
        context: &mut ToolContext<'_>,
        args: Map<String, Value>,
    ) -> Result<Value, ToolError> {
        (self.handler)(context, args)
    }
}
