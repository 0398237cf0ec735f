//! Shared test utilities for the formguard workspace.
//!
//! This crate exists because `xtask` needs `normalize_nondeterministic` at
//! runtime (not behind `#[cfg(test)]`), so a `#[cfg(test)]` module inside
//! `formguard-types` would not suffice.

use serde_json::Value;

pub const VERSION_PLACEHOLDER: &str = "__VERSION__";
pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// `tool.version` is replaced only when the *root* object looks like a report
/// envelope (`schema`, `tool`, `verdict`, `findings` and `fields` all present).
/// `started_at` / `finished_at` are replaced at the root only; reports carry no
/// nested timestamps and a form value must never be rewritten.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    let Some(obj) = value.as_object_mut() else {
        return value;
    };

    let is_envelope = ["schema", "tool", "verdict", "findings", "fields"]
        .iter()
        .all(|key| obj.contains_key(*key));
    if is_envelope
        && let Some(tool) = obj.get_mut("tool")
        && let Some(tool_obj) = tool.as_object_mut()
        && tool_obj.contains_key("name")
        && tool_obj.contains_key("version")
    {
        tool_obj.insert(
            "version".to_string(),
            Value::String(VERSION_PLACEHOLDER.to_string()),
        );
    }

    for key in ["started_at", "finished_at"] {
        if let Some(slot) = obj.get_mut(key) {
            *slot = Value::String(TIMESTAMP_PLACEHOLDER.to_string());
        }
    }

    value
}
