//! Tool box: a props bag, a tool registry, and a lifecycle behind one dispatcher.
//!
//! ```rust
//! use pcommon::Props;
//! use pschema::{ParameterSet, Property, ToolDescriptor};
//! use ptooling::{LifeCycleHandler, ToolBox, ToolDispatch, required_i64};
//! use serde_json::{Map, json};
//!
//! let add = ToolDescriptor::new(
//!     "add",
//!     "Adds two integers",
//!     ParameterSet::builder()
//!         .required("a", Property::new("integer", "Left operand")?)
//!         .required("b", Property::new("integer", "Right operand")?)
//!         .build(),
//! )?;
//!
//! let mut toolbox = ToolBox::new(Props::new())
//!     .with_args_fn(add, |args| Ok(json!(required_i64(&args, "a")? + required_i64(&args, "b")?)));
//!
//! let mut args = Map::new();
//! args.insert("a".into(), json!(2));
//! args.insert("b".into(), json!(3));
//! assert_eq!(toolbox.invoke("add", args), json!(5));
//!
//! let missing = toolbox.invoke("nonexistent_tool", Map::new());
//! assert!(missing["error"].as_str().unwrap_or_default().starts_with("AttributeError: "));
//!
//! let mut done = Map::new();
//! done.insert("message".into(), json!("sum computed"));
//! toolbox.invoke("complete", done);
//! assert!(!toolbox.incomplete());
//! # Ok::<(), pschema::SchemaError>(())
//! ```

use std::sync::{Arc, LazyLock};
use std::time::Instant;

use pcommon::Props;
use pschema::{FunctionDescriptor, ParameterSet, Property, SchemaError, ToolDescriptor};
use serde_json::{Map, Value};

use crate::{
    LifeCycle, LifeCycleHandler, NoopToolCallHooks, Tool, ToolCallHooks, ToolContext, ToolDispatch,
    ToolError, ToolRegistry, required_string,
};

/// Name of the built-in tool that marks the run as finished.
pub const COMPLETE_TOOL: &str = "complete";
/// Name of the built-in tool that marks the run as finished and reports a failure.
pub const ABORT_TOOL: &str = "abort";
/// Name of the built-in tool that reports whether the run is still active.
pub const INCOMPLETE_TOOL: &str = "incomplete";

static LIFECYCLE_TOOLS: LazyLock<Option<ToolRegistry>> =
    LazyLock::new(|| lifecycle_tools().ok());

fn lifecycle_tools() -> Result<ToolRegistry, SchemaError> {
    let complete = ToolDescriptor::new(
        COMPLETE_TOOL,
        "Marks the task as finished. Call this once the work is done.",
        ParameterSet::builder()
            .required(
                "message",
                Property::new("string", "Short summary of the outcome")?,
            )
            .build(),
    )?;
    let abort = ToolDescriptor::new(
        ABORT_TOOL,
        "Stops the task because it cannot be completed.",
        ParameterSet::builder()
            .required("content", Property::new("string", "Reason for stopping")?)
            .build(),
    )?;
    let incomplete = ToolDescriptor::new(
        INCOMPLETE_TOOL,
        "Reports whether the task is still in progress.",
        ParameterSet::empty(),
    )?;

    let mut registry = ToolRegistry::new();
    registry.register_fn(complete, |context, args| {
        context.complete(required_string(&args, "message")?);
        Ok(Value::Null)
    });
    registry.register_fn(abort, |context, args| {
        let content = required_string(&args, "content")?;
        match context.abort(content) {
            Ok(never) => match never {},
            Err(aborted) => Err(ToolError::execution(aborted.message())),
        }
    });
    registry.register_fn(incomplete, |context, _args| {
        Ok(Value::Bool(context.incomplete()))
    });
    Ok(registry)
}

pub struct ToolBox {
    props: Props,
    lifecycle: LifeCycle,
    registry: ToolRegistry,
    hooks: Arc<dyn ToolCallHooks>,
}

impl ToolBox {
    /// Creates a tool box that already serves `complete`, `abort`, and `incomplete`.
    pub fn new(props: Props) -> Self {
        let mut registry = ToolRegistry::new();
        if let Some(lifecycle) = LIFECYCLE_TOOLS.as_ref() {
            registry.extend_from(lifecycle);
        }
        Self {
            props,
            lifecycle: LifeCycle::new(),
            registry,
            hooks: Arc::new(NoopToolCallHooks),
        }
    }

    pub fn with_tool<T>(mut self, tool: T) -> Self
    where
        T: Tool + 'static,
    {
        self.registry.register(tool);
        self
    }

    pub fn with_fn<F>(mut self, descriptor: ToolDescriptor, handler: F) -> Self
    where
        F: Fn(&mut ToolContext<'_>, Map<String, Value>) -> Result<Value, ToolError>
            + Send
            + Sync
            + 'static,
    {
        self.registry.register_fn(descriptor, handler);
        self
    }

    pub fn with_args_fn<F>(mut self, descriptor: ToolDescriptor, handler: F) -> Self
    where
        F: Fn(Map<String, Value>) -> Result<Value, ToolError> + Send + Sync + 'static,
    {
        self.registry.register_args_fn(descriptor, handler);
        self
    }

    /// Adds the tools of a shared registry.
    pub fn with_registry(mut self, registry: &ToolRegistry) -> Self {
        self.registry.extend_from(registry);
        self
    }

    pub fn with_hooks<H>(mut self, hooks: H) -> Self
    where
        H: ToolCallHooks + 'static,
    {
        self.hooks = Arc::new(hooks);
        self
    }

    pub fn with_shared_hooks(mut self, hooks: Arc<dyn ToolCallHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ToolRegistry {
        &mut self.registry
    }

    pub fn function_descriptors(&self) -> Vec<FunctionDescriptor> {
        self.registry.function_descriptors()
    }
}

impl LifeCycleHandler for ToolBox {
    fn lifecycle(&self) -> &LifeCycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut LifeCycle {
        &mut self.lifecycle
    }
}

impl ToolDispatch for ToolBox {
    fn call_tool(
        &mut self,
        tool_name: &str,
        arguments: Map<String, Value>,
    ) -> Result<Value, ToolError> {
        self.hooks.on_call_start(tool_name, &arguments);
        let started = Instant::now();

        let mut context = ToolContext::new(&self.props, &mut self.lifecycle);
        let result = self.registry.call(tool_name, &mut context, arguments);

        match &result {
            Ok(value) => self
                .hooks
                .on_call_success(tool_name, value, started.elapsed()),
            Err(error) => self
                .hooks
                .on_call_failure(tool_name, error, started.elapsed()),
        }
        result
    }
}
