// Copyright 2026 The cloudstack-rs Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Response envelope handling.
//!
//! Every response looks like `{"<command>response": {...}}`. Some commands
//! put the entity one level deeper (`{"addregionresponse": {"region": {...}}}`),
//! which is described per command by its nested key.

use serde_json::{Map, Value};

use super::{Error, ErrorKind, Result};

/// Envelope key for a command.
pub fn response_key(command: &str) -> String {
    format!("{}response", command.to_lowercase())
}

/// Parse the body and strip the envelope.
///
/// If the expected key is missing but the body has exactly one top-level
/// key, its value is used instead: a few commands name their envelope
/// differently from the command itself.
pub fn unwrap_envelope(body: &str, key: &str) -> Result<Value> {
    let root: Value = serde_json::from_str(body)?;
    let mut root = match root {
        Value::Object(map) => map,
        other => {
            return Err(Error::new(
                ErrorKind::InvalidResponse,
                format!("Expected a JSON object in response, got {}", other),
            ))
        }
    };

    if let Some(value) = root.remove(key) {
        return Ok(value);
    }

    if root.len() == 1 {
        if let Some((other, value)) = root.into_iter().next() {
            debug!("Using envelope {} instead of expected {}", other, key);
            return Ok(value);
        }
    }

    Err(Error::new(
        ErrorKind::InvalidResponse,
        format!("Response envelope {} is missing", key),
    ))
}

/// Descend into the nested entity, if present.
///
/// Values without the nested key are returned unchanged.
pub fn nested_value(value: Value, key: Option<&str>) -> Value {
    match (key, value) {
        (Some(key), Value::Object(mut map)) => match map.remove(key) {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        (_, value) => value,
    }
}

/// Overlay the fields of `update` on top of `base`.
///
/// Used to replace an incomplete asynchronous response with the final job
/// result while keeping fields like the job ID.
pub fn merge(base: Value, update: Value) -> Value {
    match (base, update) {
        (Value::Object(mut base), Value::Object(update)) => {
            for (key, value) in update {
                let _ = base.insert(key, value);
            }
            Value::Object(base)
        }
        (base, Value::Null) => base,
        (_, update) => update,
    }
}

/// Extract a server error from an unwrapped envelope.
pub fn server_error(value: &Value) -> Option<Error> {
    let map: &Map<String, Value> = value.as_object()?;
    let text = map.get("errortext")?.as_str()?;
    let code = map
        .get("errorcode")
        .and_then(Value::as_i64)
        .and_then(|c| i32::try_from(c).ok())?;
    let cs_code = map
        .get("cserrorcode")
        .and_then(Value::as_i64)
        .and_then(|c| i32::try_from(c).ok());
    Some(Error::from_api(code, cs_code, text.to_string()))
}
