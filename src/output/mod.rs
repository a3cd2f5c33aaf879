pub mod human;

use serde_json::{Value, json};

use crate::core::entry::Entry;

/// Standard JSON envelope.
pub fn success(command: &str, data: Value) -> Value {
    json!({
        "status": "ok",
        "command": command,
        "data": data,
        "error": null
    })
}

pub fn error(command: &str, code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "command": command,
        "data": null,
        "error": {
            "code": code,
            "message": message
        }
    })
}

/// One record as it appears in `data.entries`.
pub fn entry_json(entry: &Entry) -> Value {
    let metric = match entry.metric() {
        Some(m) => json!(m.name()),
        None => json!(entry.metric_code()),
    };
    json!({
        "id": entry.id(),
        "domain": entry.domain().name(),
        "metric": metric,
        "time": entry.time(),
        "record": entry,
    })
}
