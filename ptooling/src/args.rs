//! Argument checking and JSON parsing helpers for tools.
//!
//! ```rust
//! use ptooling::{parse_fenced_json, parse_json_object, required_string};
//!
//! let args = parse_json_object(r#"{"query":"rust"}"#).expect("object should parse");
//! let query = required_string(&args, "query").expect("query should be present");
//! assert_eq!(query, "rust");
//!
//! let reply = "Here you go:\n```json\n{\"done\": true}\n```";
//! assert_eq!(parse_fenced_json(reply).expect("fenced json")["done"], true);
//! ```

use std::sync::LazyLock;

use pschema::ToolDescriptor;
use regex::Regex;
use serde_json::{Map, Value};

use crate::ToolError;

static FENCED_JSON: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)```json\n(.*)\n```").ok());

pub fn parse_json_value(args_json: &str) -> Result<Value, ToolError> {
    serde_json::from_str(args_json)
        .map_err(|err| ToolError::invalid_arguments(format!("invalid JSON arguments: {err}")))
}

pub fn parse_json_object(args_json: &str) -> Result<Map<String, Value>, ToolError> {
    match parse_json_value(args_json)? {
        Value::Object(map) => Ok(map),
        _ => Err(ToolError::invalid_arguments("expected JSON object arguments")),
    }
}

/// Parses the body of a ```` ```json ```` fence when present, else the whole text.
pub fn parse_fenced_json(text: &str) -> Result<Value, ToolError> {
    let payload = FENCED_JSON
        .as_ref()
        .and_then(|pattern| pattern.captures(text))
        .and_then(|captures| captures.get(1))
        .map_or(text, |body| body.as_str());

    serde_json::from_str(payload)
        .map_err(|err| ToolError::invalid_value(format!("invalid JSON: {err}")))
}

/// Checks argument names against the descriptor's declared parameters.
pub fn check_arguments(
    descriptor: &ToolDescriptor,
    args: &Map<String, Value>,
) -> Result<(), ToolError> {
    let parameters = descriptor.parameters();

    if let Some(unexpected) = args
        .keys()
        .find(|name| parameters.property(name.as_str()).is_none())
    {
        return Err(ToolError::invalid_arguments(format!(
            "{}() got an unexpected keyword argument '{unexpected}'",
            descriptor.name()
        )));
    }

    let missing: Vec<String> = parameters
        .required()
        .iter()
        .filter(|name| !args.contains_key(name.as_str()))
        .map(|name| format!("'{name}'"))
        .collect();

    if !missing.is_empty() {
        let noun = if missing.len() == 1 {
            "argument"
        } else {
            "arguments"
        };
        return Err(ToolError::invalid_arguments(format!(
            "{}() missing {} required {noun}: {}",
            descriptor.name(),
            missing.len(),
            missing.join(", ")
        )));
    }

    Ok(())
}

pub fn required_string(args: &Map<String, Value>, key: &str) -> Result<String, ToolError> {
    optional_string(args, key)?
        .ok_or_else(|| ToolError::invalid_arguments(format!("missing required string: '{key}'")))
}

pub fn optional_string(args: &Map<String, Value>, key: &str) -> Result<Option<String>, ToolError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(ToolError::invalid_arguments(format!(
            "argument '{key}' must be a string"
        ))),
    }
}

pub fn required_i64(args: &Map<String, Value>, key: &str) -> Result<i64, ToolError> {
    let value = required(args, key)?;
    value
        .as_i64()
        .ok_or_else(|| ToolError::invalid_arguments(format!("argument '{key}' must be an integer")))
}

pub fn required_f64(args: &Map<String, Value>, key: &str) -> Result<f64, ToolError> {
    let value = required(args, key)?;
    value
        .as_f64()
        .ok_or_else(|| ToolError::invalid_arguments(format!("argument '{key}' must be a number")))
}

pub fn required_bool(args: &Map<String, Value>, key: &str) -> Result<bool, ToolError> {
    let value = required(args, key)?;
    value
        .as_bool()
        .ok_or_else(|| ToolError::invalid_arguments(format!("argument '{key}' must be a boolean")))
}

fn required<'a>(args: &'a Map<String, Value>, key: &str) -> Result<&'a Value, ToolError> {
    args.get(key)
        .ok_or_else(|| ToolError::invalid_arguments(format!("missing required argument: '{key}'")))
}
