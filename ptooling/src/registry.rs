//! Tool registry for lookup by descriptor name.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use pcommon::Registry;
use pschema::{FunctionDescriptor, ToolDescriptor};
use serde_json::{Map, Value};

use crate::{FunctionTool, Tool, ToolContext, ToolError, check_arguments};

#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: Registry<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T>(&mut self, tool: T)
    where
        T: Tool + 'static,
    {
        self.register_shared(Arc::new(tool));
    }

    pub fn register_shared(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.descriptor().name().to_string();
        self.tools.insert(name, tool);
    }

    pub fn register_fn<F>(&mut self, descriptor: ToolDescriptor, handler: F)
    where
        F: Fn(&mut ToolContext<'_>, Map<String, Value>) -> Result<Value, ToolError>
            + Send
            + Sync
            + 'static,
    {
        self.register(FunctionTool::new(descriptor, handler));
    }

    /// Registers a handler that only needs its arguments.
    pub fn register_args_fn<F>(&mut self, descriptor: ToolDescriptor, handler: F)
    where
        F: Fn(Map<String, Value>) -> Result<Value, ToolError> + Send + Sync + 'static,
    {
        self.register_fn(descriptor, move |_context, args| handler(args));
    }

    /// Adds every tool of `other`, replacing same-named entries.
    pub fn extend_from(&mut self, other: &ToolRegistry) {
        for tool in other.tools.values() {
            self.register_shared(Arc::clone(tool));
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.remove(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .values()
            .map(|tool| tool.descriptor().clone())
            .collect()
    }

    pub fn function_descriptors(&self) -> Vec<FunctionDescriptor> {
        self.descriptors()
            .into_iter()
            .map(FunctionDescriptor::new)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Resolves `name`, checks `args` against its descriptor, and runs it.
    ///
    /// A panic inside the tool is reported as an execution error.
    pub fn call(
        &self,
        name: &str,
        context: &mut ToolContext<'_>,
        args: Map<String, Value>,
    ) -> Result<Value, ToolError> {
        let tool = self.tools.get(name).ok_or_else(|| {
            ToolError::not_found(format!("tool '{name}' is not registered")).with_tool_name(name)
        })?;

        check_arguments(tool.descriptor(), &args).map_err(|error| error.with_tool_name(name))?;

        match catch_unwind(AssertUnwindSafe(|| tool.call(context, args))) {
            Ok(result) => result.map_err(|error| error.with_tool_name(name)),
            Err(payload) => Err(ToolError::execution(panic_message(payload.as_ref()))
                .with_tool_name(name)),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "tool panicked".to_string()
}
