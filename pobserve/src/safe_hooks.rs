use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use ptooling::{ToolCallHooks, ToolError};
use serde_json::{Map, Value};

/// Wraps hooks so a panicking observer cannot break dispatch.
pub struct SafeToolCallHooks<H> {
    inner: H,
}

impl<H> SafeToolCallHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ToolCallHooks for SafeToolCallHooks<H>
where
    H: ToolCallHooks,
{
    fn on_call_start(&self, tool_name: &str, args: &Map<String, Value>) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_call_start(tool_name, args)
        }));
    }

    fn on_call_success(&self, tool_name: &str, result: &Value, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_call_success(tool_name, result, elapsed)
        }));
    }

    fn on_call_failure(&self, tool_name: &str, error: &ToolError, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_call_failure(tool_name, error, elapsed)
        }));
    }
}
