//! Name-based dispatch that turns failures into error values.

use serde_json::{Map, Value};

use crate::ToolError;

/// Capability for invoking tools by name.
///
/// Implementors provide [`ToolDispatch::call_tool`]; [`ToolDispatch::invoke`]
/// folds every failure into `{"error": "<Kind>: <message>"}` so callers can
/// drive a sequence of calls without per-call error handling.
pub trait ToolDispatch {
    fn call_tool(
        &mut self,
        tool_name: &str,
        arguments: Map<String, Value>,
    ) -> Result<Value, ToolError>;

    /// Returns the tool's own result or an error value.
    fn invoke(&mut self, tool_name: &str, arguments: Map<String, Value>) -> Value {
        self.call_tool(tool_name, arguments)
            .unwrap_or_else(|error| error.to_error_value())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{ToolErrorKind, error_message, required_i64};

    /// Dispatch over a fixed match, without any registry.
    struct Calculator;

    impl ToolDispatch for Calculator {
        fn call_tool(
            &mut self,
            tool_name: &str,
            arguments: Map<String, Value>,
        ) -> Result<Value, ToolError> {
            match tool_name {
                "add" => Ok(json!(
                    required_i64(&arguments, "a")? + required_i64(&arguments, "b")?
                )),
                "divide" => {
                    let divisor = required_i64(&arguments, "b")?;
                    if divisor == 0 {
                        return Err(ToolError::invalid_value("division by zero"));
                    }
                    Ok(json!(required_i64(&arguments, "a")? / divisor))
                }
                "wait" => Err(ToolError::timeout("gave up after 5s")),
                "crash" => Err(ToolError::execution("stack overflow")),
                _ => Err(ToolError::not_found(format!("no tool named '{tool_name}'"))),
            }
        }
    }

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn any_dispatcher_gets_error_absorption() {
        let mut calculator = Calculator;

        assert_eq!(calculator.invoke("add", args(json!({"a": 2, "b": 3}))), json!(5));

        let cases = [
            ("divide", json!({"a": 1, "b": 0}), "ValueError: division by zero"),
            ("wait", json!({}), "TimeoutError: gave up after 5s"),
            ("crash", json!({}), "Exception: stack overflow"),
            ("sqrt", json!({}), "AttributeError: no tool named 'sqrt'"),
            ("add", json!({"a": "x", "b": 1}), "TypeError: argument 'a' must be an integer"),
        ];
        for (name, arguments, expected) in cases {
            let value = calculator.invoke(name, args(arguments));
            assert_eq!(error_message(&value), Some(expected));
        }
    }

    #[test]
    fn raw_call_keeps_the_structured_error() {
        let mut calculator = Calculator;

        let raw = calculator.call_tool("crash", Map::new()).expect_err("raw call fails");
        assert_eq!(raw.kind, ToolErrorKind::Execution);
        assert_eq!(raw.message, "stack overflow");
    }
}
