//! Subcommand implementations.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use parsely::{FunctionDescriptor, PlainData, parse_fenced_json};
use serde_json::Value;

pub const TRACING_TARGET_COMMANDS: &str = "pcli::commands";

/// Reads `path`, treating `-` as stdin.
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn extract(text: &str) -> anyhow::Result<Value> {
    let value = parse_fenced_json(text).context("input does not contain valid JSON")?;
    tracing::debug!(target: TRACING_TARGET_COMMANDS, kind = json_kind(&value), "extracted json");
    Ok(value)
}

/// Validates one function descriptor or an array of them and returns their plain data.
pub fn check(text: &str) -> anyhow::Result<Value> {
    match extract(text)? {
        Value::Array(items) => {
            let plain = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    plain_descriptor(item)
                        .with_context(|| format!("invalid descriptor at index {index}"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            tracing::info!(
                target: TRACING_TARGET_COMMANDS,
                count = plain.len(),
                "descriptors are valid"
            );
            Ok(Value::Array(plain))
        }
        item => {
            let plain = plain_descriptor(item).context("invalid descriptor")?;
            tracing::info!(target: TRACING_TARGET_COMMANDS, count = 1, "descriptors are valid");
            Ok(plain)
        }
    }
}

fn plain_descriptor(value: Value) -> anyhow::Result<Value> {
    let descriptor: FunctionDescriptor = serde_json::from_value(value)?;
    tracing::debug!(
        target: TRACING_TARGET_COMMANDS,
        tool_name = descriptor.function().name(),
        "descriptor parsed"
    );
    Ok(Value::Object(descriptor.to_plain_data()?))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
