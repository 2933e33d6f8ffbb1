//! Wiring helpers for a tool box with tracing hooks.

use pcommon::Props;
use pobserve::{SafeToolCallHooks, TracingToolCallHooks};
use ptooling::{ToolBox, ToolRegistry};

pub fn observed_toolbox(props: Props) -> ToolBox {
    observed_toolbox_with(props, &ToolRegistry::new())
}

/// Builds a tool box serving the lifecycle tools plus `registry`, logging each call.
pub fn observed_toolbox_with(props: Props, registry: &ToolRegistry) -> ToolBox {
    ToolBox::new(props)
        .with_registry(registry)
        .with_hooks(SafeToolCallHooks::new(TracingToolCallHooks))
}
