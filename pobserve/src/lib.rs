//! Production-friendly observability hooks for tool dispatch.
//!
//! ```rust
//! use pobserve::{MetricsToolCallHooks, SafeToolCallHooks, TracingToolCallHooks};
//!
//! let _tool_hooks = SafeToolCallHooks::new(TracingToolCallHooks);
//! let _metrics = MetricsToolCallHooks;
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsToolCallHooks;
pub use safe_hooks::SafeToolCallHooks;
pub use tracing_hooks::TracingToolCallHooks;

pub mod prelude {
    pub use crate::{MetricsToolCallHooks, SafeToolCallHooks, TracingToolCallHooks};
}
