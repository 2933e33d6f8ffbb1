//! Tracing-based observability hooks for tool dispatch.
//!
//! ```rust
//! use pobserve::TracingToolCallHooks;
//! use ptooling::ToolCallHooks;
//!
//! fn accepts_tool_hooks(_hooks: &dyn ToolCallHooks) {}
//!
//! let hooks = TracingToolCallHooks;
//! accepts_tool_hooks(&hooks);
//! ```

use std::time::Duration;

use ptooling::{ToolCallHooks, ToolError};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingToolCallHooks;

impl ToolCallHooks for TracingToolCallHooks {
    fn on_call_start(&self, tool_name: &str, args: &Map<String, Value>) {
        tracing::info!(
            phase = "tool",
            event = "call_start",
            tool_name,
            arg_count = args.len()
        );
        tracing::debug!(phase = "tool", tool_name, args = %serde_json::Value::Object(args.clone()));
    }

    fn on_call_success(&self, tool_name: &str, _result: &Value, elapsed: Duration) {
        tracing::info!(
            phase = "tool",
            event = "call_success",
            tool_name,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_call_failure(&self, tool_name: &str, error: &ToolError, elapsed: Duration) {
        tracing::warn!(
            phase = "tool",
            event = "call_failure",
            tool_name,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = error.kind.label(),
            user_error = error.is_user_error(),
            error = %error
        );
    }
}
