//! Classification of the module's serialized output.
//!
//! Every call point returns one JSON record. The record either carries the
//! demo's result or a structured failure (`{"success": false, "error":
//! "..."}`). Classification happens on the raw record before any typed
//! decoding, so failure records never need to satisfy a success shape.

use crate::error::ComputeFault;
use crate::outcome::ModuleOutcome;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode one module output record and classify it.
///
/// Classification contract: a `success` flag that is true, or an `error`
/// field that is absent (or null), counts as success, and the entire record
/// decodes as the payload. In particular a record with `success: false` and
/// no `error` field is a success; downstream renderers rely on this exact
/// rule, so it stays even though the intuitive reading differs.
pub fn parse_result<T: DeserializeOwned>(json: &str) -> Result<ModuleOutcome<T>, ComputeFault> {
    let record: Value = serde_json::from_str(json)?;

    let success = record
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let failure = match record.get("error").filter(|v| !v.is_null()) {
        Some(error) if !success => Some(error_text(error)),
        _ => None,
    };

    if let Some(message) = failure {
        return Ok(ModuleOutcome::Failure(message));
    }
    let payload = serde_json::from_value(record)?;
    Ok(ModuleOutcome::Success(payload))
}

fn error_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
