//! Boundary decoding for collection responses
//!
//! The backend is duck-typed: a reachable endpoint may answer with a JSON
//! array, an error object, or garbage. All shape checking happens here, in
//! one place. A 2xx body that is not an array of the expected elements
//! decodes to an empty collection; malformed-but-reachable never raises.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Decode a collection body leniently
///
/// Returns the decoded elements when the body is a JSON array of the
/// expected shape, and an empty `Vec` for every other shape. `context`
/// names the collection for the warning log.
pub fn collection<T: DeserializeOwned>(bytes: &[u8], context: &str) -> Vec<T> {
    let value: Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => {
            warn!("{}: response body is not JSON: {}", context, e);
            return Vec::new();
        }
    };

    // The billing backend encodes an empty collection as `null`
    if value.is_null() {
        return Vec::new();
    }

    if !value.is_array() {
        warn!("{}: expected a JSON array, got {}", context, type_name(&value));
        return Vec::new();
    }

    match serde_json::from_value(value) {
        Ok(items) => items,
        Err(e) => {
            warn!("{}: array elements did not match expected shape: {}", context, e);
            Vec::new()
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// Tests
// ============================================================================
