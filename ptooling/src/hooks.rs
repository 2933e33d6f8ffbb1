//! Observer hooks for tool call events.
//!
//! ```rust
//! use ptooling::{NoopToolCallHooks, ToolCallHooks};
//!
//! fn assert_hooks_trait(_hooks: &dyn ToolCallHooks) {}
//!
//! let hooks = NoopToolCallHooks;
//! assert_hooks_trait(&hooks);
//! ```

use std::time::Duration;

use serde_json::{Map, Value};

use crate::ToolError;

pub trait ToolCallHooks: Send + Sync {
    fn on_call_start(&self, _tool_name: &str, _args: &Map<String, Value>) {}

    fn on_call_success(&self, _tool_name: &str, _result: &Value, _elapsed: Duration) {}

    fn on_call_failure(&self, _tool_name: &str, _error: &ToolError, _elapsed: Duration) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopToolCallHooks;

impl ToolCallHooks for NoopToolCallHooks {}
