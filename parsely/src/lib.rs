//! Unified facade over the parsely workspace crates.
//!
//! This crate is designed to be the single dependency for most applications.
//! It re-exports the schema, tooling, and observability crates and provides
//! convenience constructors and macros for describing and dispatching tools.

mod macros;

pub mod prelude;
pub mod runtime;
pub mod util;

pub use pcommon;
pub use pobserve;
pub use pschema;
pub use ptooling;
pub use serde_json;

pub use pcommon::{Props, Registry};
pub use pobserve::{MetricsToolCallHooks, SafeToolCallHooks, TracingToolCallHooks};
pub use pschema::{
    FunctionDescriptor, FunctionKind, MAX_DESCRIPTION_LENGTH, ParameterSet, ParameterSetBuilder,
    ParametersKind, PlainData, Property, SchemaError, SchemaErrorKind, ToolDescriptor,
    prune_nulls, to_plain_data,
};
pub use ptooling::{
    ABORT_TOOL, AbortError, COMPLETE_TOOL, FunctionTool, INCOMPLETE_TOOL, LifeCycle,
    LifeCycleHandler, NoopToolCallHooks, Tool, ToolBox, ToolCallHooks, ToolContext, ToolDispatch,
    ToolError, ToolErrorKind, ToolRegistry, check_arguments, error_message, is_error_value,
    optional_string, parse_fenced_json, parse_json_object, parse_json_value, required_bool,
    required_f64, required_i64, required_string,
};

pub use runtime::{observed_toolbox, observed_toolbox_with};
pub use util::{
    array_property, boolean_property, function, integer_property, number_property,
    object_property, string_property, tool,
};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{ParameterSet, ToolDispatch, error_message};

    #[test]
    fn ps_args_macro_builds_argument_map() {
        let args = crate::ps_args! {
            "a" => 2,
            "name" => "x",
        };

        assert_eq!(args.len(), 2);
        assert_eq!(args["a"], json!(2));
        assert_eq!(args["name"], json!("x"));
    }

    #[test]
    fn ps_params_macro_marks_required_names() {
        let parameters = crate::ps_params! {
            "query" => crate::string_property("Search text").expect("valid"),
            "limit"? => crate::integer_property("Maximum hits").expect("valid"),
        };

        assert_eq!(parameters.required(), ["query"]);
        assert_eq!(parameters.properties().len(), 2);
        assert!(parameters.missing_required().is_empty());
    }

    #[test]
    fn facade_types_compose_into_a_dispatching_toolbox() {
        let ping = crate::tool("ping", "Replies with pong", ParameterSet::empty())
            .expect("valid descriptor");
        let mut toolbox = crate::observed_toolbox(crate::Props::new())
            .with_args_fn(ping, |_args| Ok(json!("pong")));

        assert_eq!(toolbox.invoke("ping", crate::ps_args! {}), json!("pong"));
        let missing = toolbox.invoke("pong", crate::ps_args! {});
        assert!(
            error_message(&missing)
                .unwrap_or_default()
                .starts_with("AttributeError: ")
        );
    }
}
