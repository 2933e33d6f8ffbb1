//! Tool dispatch errors and their structured error values.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde_json::{Value, json};

/// Failure classes, listed in dispatch precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolErrorKind {
    NotFound,
    InvalidArguments,
    Timeout,
    InvalidValue,
    Execution,
}

impl ToolErrorKind {
    /// Kind name used in `{"error": "<Kind>: <message>"}` values.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotFound => "AttributeError",
            Self::InvalidArguments => "TypeError",
            Self::Timeout => "TimeoutError",
            Self::InvalidValue => "ValueError",
            Self::Execution => "Exception",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub message: String,
    pub tool_name: Option<String>,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            tool_name: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::NotFound, message)
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::InvalidArguments, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Timeout, message)
    }

    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::InvalidValue, message)
    }

    pub fn execution(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Execution, message)
    }

    pub fn with_tool_name(mut self, tool_name: impl Into<String>) -> Self {
        self.tool_name = Some(tool_name.into());
        self
    }

    pub fn is_user_error(&self) -> bool {
        matches!(
            self.kind,
            ToolErrorKind::InvalidArguments | ToolErrorKind::NotFound
        )
    }

    pub fn to_error_value(&self) -> Value {
        json!({ "error": format!("{}: {}", self.kind.label(), self.message) })
    }
}

impl Display for ToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.tool_name {
            Some(tool_name) => write!(
                f,
                "{} [tool={}]: {}",
                self.kind.label(),
                tool_name,
                self.message
            ),
            None => write!(f, "{}: {}", self.kind.label(), self.message),
        }
    }
}

impl Error for ToolError {}

/// Returned by [`LifeCycleHandler::abort`](crate::LifeCycleHandler::abort)
/// after the tracker has been marked completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbortError {
    message: String,
}

impl AbortError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for AbortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for AbortError {}

pub fn is_error_value(value: &Value) -> bool {
    error_message(value).is_some()
}

/// Text of an `{"error": ...}` value returned by dispatch.
pub fn error_message(value: &Value) -> Option<&str> {
    value.as_object()?.get("error")?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_value_prefixes_message_with_kind_label() {
        let cases = [
            (ToolError::not_found("no tool"), "AttributeError: no tool"),
            (ToolError::invalid_arguments("bad"), "TypeError: bad"),
            (ToolError::timeout("slow"), "TimeoutError: slow"),
            (ToolError::invalid_value("nan"), "ValueError: nan"),
            (ToolError::execution("boom"), "Exception: boom"),
        ];

        for (error, expected) in cases {
            let value = error.to_error_value();
            assert_eq!(error_message(&value), Some(expected));
            assert!(is_error_value(&value));
        }
    }

    #[test]
    fn tool_name_is_shown_in_display_but_not_in_error_value() {
        let error = ToolError::timeout("slow").with_tool_name("fetch");

        assert_eq!(error.to_string(), "TimeoutError [tool=fetch]: slow");
        assert_eq!(error.to_error_value(), json!({"error": "TimeoutError: slow"}));
    }

    #[test]
    fn user_errors_are_lookup_and_argument_failures() {
        assert!(ToolError::not_found("x").is_user_error());
        assert!(ToolError::invalid_arguments("x").is_user_error());
        assert!(!ToolError::execution("x").is_user_error());
        assert!(!ToolError::timeout("x").is_user_error());
    }

    #[test]
    fn plain_results_are_not_error_values() {
        assert!(!is_error_value(&json!(5)));
        assert!(!is_error_value(&json!({"error": 1})));
        assert!(!is_error_value(&json!({"result": "ok"})));
    }
}
