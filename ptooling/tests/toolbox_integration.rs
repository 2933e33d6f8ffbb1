use std::sync::{Arc, Mutex};
use std::time::Duration;

use pcommon::Props;
use pschema::{ParameterSet, PlainData, Property, ToolDescriptor};
use ptooling::prelude::*;
use ptooling::{error_message, required_f64, required_i64, required_string};
use serde_json::{Map, Value, json};

fn descriptor(name: &str, parameters: ParameterSet) -> ToolDescriptor {
    ToolDescriptor::new(name, format!("Test tool {name}"), parameters).expect("valid descriptor")
}

fn integer(description: &str) -> Property {
    Property::new("integer", description).expect("valid property")
}

fn text(description: &str) -> Property {
    Property::new("string", description).expect("valid property")
}

fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object arguments, got {other}"),
    }
}

fn sample_toolbox() -> ToolBox {
    let add = descriptor(
        "add",
        ParameterSet::builder()
            .required("a", integer("Left operand"))
            .required("b", integer("Right operand"))
            .build(),
    );
    let greet = descriptor(
        "greet",
        ParameterSet::builder().required("name", text("Who to greet")).build(),
    );
    let fetch = descriptor(
        "fetch",
        ParameterSet::builder().required("url", text("Address to fetch")).build(),
    );
    let sqrt = descriptor(
        "sqrt",
        ParameterSet::builder()
            .required("x", Property::new("number", "Radicand").expect("valid"))
            .build(),
    );
    let whoami = descriptor("whoami", ParameterSet::empty());

    ToolBox::new(Props::new().with("user", "ada"))
        .with_args_fn(add, |args| {
            Ok(json!(required_i64(&args, "a")? + required_i64(&args, "b")?))
        })
        .with_args_fn(greet, |args| {
            Ok(json!(format!("Hello, {}!", required_string(&args, "name")?)))
        })
        .with_args_fn(fetch, |args| {
            let url = required_string(&args, "url")?;
            Err(ToolError::timeout(format!("request to {url} timed out")))
        })
        .with_args_fn(sqrt, |args| {
            let x = required_f64(&args, "x")?;
            if x < 0.0 {
                return Err(ToolError::invalid_value(format!("math domain error: {x}")));
            }
            Ok(json!(x.sqrt()))
        })
        .with_fn(whoami, |context, _args| {
            Ok(context.prop("user").cloned().unwrap_or(Value::Null))
        })
}

fn error_of(value: &Value) -> &str {
    error_message(value).expect("value should be an error value")
}

#[test]
fn success_path_returns_tool_result_unchanged() {
    let mut toolbox = sample_toolbox();

    let sum = toolbox.invoke("add", args(json!({"a": 2, "b": 3})));
    assert_eq!(sum, json!(5));

    let greeting = toolbox.invoke("greet", args(json!({"name": "x"})));
    assert_eq!(greeting, json!("Hello, x!"));

    let user = toolbox.invoke("whoami", Map::new());
    assert_eq!(user, json!("ada"));
}

#[test]
fn failures_are_classified_in_precedence_order() {
    let mut toolbox = sample_toolbox();

    let missing = toolbox.invoke("nonexistent_tool", Map::new());
    assert!(error_of(&missing).starts_with("AttributeError: "));

    let wrong_keyword = toolbox.invoke("greet", args(json!({"nam": "x"})));
    assert!(error_of(&wrong_keyword).starts_with("TypeError: "));

    let timeout = toolbox.invoke("fetch", args(json!({"url": "https://example.invalid"})));
    assert_eq!(
        error_of(&timeout),
        "TimeoutError: request to https://example.invalid timed out"
    );

    let domain = toolbox.invoke("sqrt", args(json!({"x": -1.0})));
    assert!(error_of(&domain).starts_with("ValueError: math domain error"));
}

#[test]
fn argument_check_runs_before_tool_specific_failures() {
    let mut toolbox = sample_toolbox();

    let value = toolbox.invoke("fetch", args(json!({"url": "x", "retries": 3})));

    assert_eq!(
        error_of(&value),
        "TypeError: fetch() got an unexpected keyword argument 'retries'"
    );
}

#[test]
fn run_continues_after_errors_until_complete() {
    let mut toolbox = sample_toolbox();
    let calls = [
        ("nonexistent_tool", json!({})),
        ("add", json!({"a": 1})),
        ("add", json!({"a": 1, "b": 1})),
        ("complete", json!({"message": "sum computed"})),
    ];

    let mut errors = 0;
    for (name, arguments) in calls {
        assert!(toolbox.incomplete());
        let value = toolbox.invoke(name, args(arguments));
        if error_message(&value).is_some() {
            errors += 1;
        }
    }

    assert_eq!(errors, 2);
    assert!(!toolbox.incomplete());
}

#[test]
fn abort_tool_ends_the_run_without_escaping_dispatch() {
    let mut toolbox = sample_toolbox();

    assert_eq!(toolbox.invoke("incomplete", Map::new()), json!(true));
    let value = toolbox.invoke("abort", args(json!({"content": "bad"})));

    assert_eq!(error_of(&value), "Exception: bad");
    assert!(!toolbox.incomplete());
    assert_eq!(toolbox.invoke("incomplete", Map::new()), json!(false));
    assert_eq!(toolbox.lifecycle().completion_message(), Some("Abort: bad"));
}

#[test]
fn tool_errors_never_end_the_run() {
    let mut toolbox = sample_toolbox();

    for (name, arguments) in [
        ("fetch", json!({"url": "x"})),
        ("sqrt", json!({"x": -4.0})),
        ("missing", json!({})),
    ] {
        let value = toolbox.invoke(name, args(arguments));
        assert!(error_message(&value).is_some());
        assert!(toolbox.incomplete());
    }
}

#[test]
fn advertised_descriptors_serialize_without_absent_items() {
    let toolbox = sample_toolbox();

    let plain: Vec<Map<String, Value>> = toolbox
        .function_descriptors()
        .iter()
        .map(|function| function.to_plain_data().expect("plain data"))
        .collect();

    assert_eq!(plain.len(), 8);
    assert_eq!(plain[0]["function"]["name"], "complete");
    assert_eq!(plain[3]["function"]["name"], "add");
    assert_eq!(
        plain[3]["function"]["parameters"]["properties"]["a"],
        json!({"type": "integer", "description": "Left operand"})
    );
    assert_eq!(plain[7]["function"]["name"], "whoami");
    assert_eq!(plain[7]["function"]["parameters"]["required"], json!([]));
}

#[derive(Default, Clone)]
struct RecordingHooks {
    events: Arc<Mutex<Vec<String>>>,
}

impl ToolCallHooks for RecordingHooks {
    fn on_call_start(&self, tool_name: &str, _args: &Map<String, Value>) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("start:{tool_name}"));
    }

    fn on_call_success(&self, tool_name: &str, _result: &Value, _elapsed: Duration) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("success:{tool_name}"));
    }

    fn on_call_failure(&self, tool_name: &str, error: &ToolError, _elapsed: Duration) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("failure:{tool_name}:{:?}", error.kind));
    }
}

#[test]
fn hooks_observe_each_call() {
    let hooks = RecordingHooks::default();
    let mut toolbox = sample_toolbox().with_hooks(hooks.clone());

    toolbox.invoke("add", args(json!({"a": 1, "b": 2})));
    toolbox.invoke("missing", Map::new());
    toolbox.invoke("abort", args(json!({"content": "stop"})));

    let events = hooks.events.lock().expect("events lock").clone();
    assert_eq!(
        events,
        [
            "start:add",
            "success:add",
            "start:missing",
            "failure:missing:NotFound",
            "start:abort",
            "failure:abort:Execution",
        ]
    );
}

#[test]
fn shared_registry_serves_multiple_toolboxes() {
    let mut shared = ToolRegistry::new();
    shared.register_fn(
        descriptor("finish", ParameterSet::empty()),
        |context, _args| {
            context.complete("finished by shared tool");
            Ok(Value::Bool(true))
        },
    );

    let mut first = ToolBox::new(Props::new()).with_registry(&shared);
    let second = ToolBox::new(Props::new()).with_registry(&shared);

    assert_eq!(first.invoke("finish", Map::new()), json!(true));
    assert!(!first.incomplete());
    assert!(second.incomplete());
    assert_eq!(
        second.registry().names(),
        ["complete", "abort", "incomplete", "finish"]
    );
}
