//! JSON result output.
//!
//! Every command prints exactly one result object on stdout:
//! `{"status": "success", ...}` on success or
//! `{"status": "error", "message": "..."}` on failure, paired with a
//! non-zero process exit code.  All commands go through these helpers so
//! the shape stays uniform.

use serde::Serialize;
use serde_json::{json, Map, Value};

/// Print a bare success result: `{"status":"success"}`.
pub fn success() {
    render(json!({ "status": "success" }));
}

/// Print a success result with a human-readable message.
pub fn success_message(msg: &str) {
    render(json!({ "status": "success", "message": msg }));
}

/// Print a success result carrying one named value.
pub fn success_value<T: Serialize>(key: &str, value: &T) {
    let mut obj = Map::new();
    obj.insert("status".to_string(), Value::String("success".to_string()));
    obj.insert(
        key.to_string(),
        serde_json::to_value(value).unwrap_or(Value::Null),
    );
    render(Value::Object(obj));
}

/// Print a success result with the fields of `value` merged in.
pub fn success_object<T: Serialize>(value: &T) {
    let mut obj = match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    obj.insert("status".to_string(), Value::String("success".to_string()));
    render(Value::Object(obj));
}

/// Print an error result: `{"status":"error","message":"..."}`.
pub fn error(msg: &str) {
    render(json!({ "status": "error", "message": msg }));
}

fn render(value: Value) {
    println!("{value}");
}
