//! Metrics-based observability hooks for tool dispatch.
//!
//! ```rust
//! use pobserve::MetricsToolCallHooks;
//! use ptooling::ToolCallHooks;
//!
//! fn accepts_tool_hooks(_hooks: &dyn ToolCallHooks) {}
//!
//! let hooks = MetricsToolCallHooks;
//! accepts_tool_hooks(&hooks);
//! ```

use std::time::Duration;

use ptooling::{ToolCallHooks, ToolError};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsToolCallHooks;

impl ToolCallHooks for MetricsToolCallHooks {
    fn on_call_start(&self, tool_name: &str, _args: &Map<String, Value>) {
        metrics::counter!(
            "parsely_tool_call_start_total",
            "tool_name" => tool_name.to_string()
        )
        .increment(1);
    }

    fn on_call_success(&self, tool_name: &str, _result: &Value, elapsed: Duration) {
        metrics::counter!(
            "parsely_tool_call_success_total",
            "tool_name" => tool_name.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "parsely_tool_call_duration_seconds",
            "tool_name" => tool_name.to_string(),
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_call_failure(&self, tool_name: &str, error: &ToolError, elapsed: Duration) {
        metrics::counter!(
            "parsely_tool_call_failure_total",
            "tool_name" => tool_name.to_string(),
            "error_kind" => error.kind.label()
        )
        .increment(1);
        metrics::histogram!(
            "parsely_tool_call_duration_seconds",
            "tool_name" => tool_name.to_string(),
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}
