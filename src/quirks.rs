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

//! Normalization of fields the server serializes inconsistently.
//!
//! Depending on the version, the management server sends some fields with
//! a different JSON type. All known cases are listed in `QUIRKS` and fixed
//! before a response is decoded into a protocol structure.

use serde_json::{Map, Value};

/// Expected JSON type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quirk {
    /// A boolean that may come as `"true"`/`"false"`.
    Bool,
    /// A string ID that may come as a (floating point) number.
    StringId,
}

const QUIRKS: &[(&str, Quirk)] = &[
    ("success", Quirk::Bool),
    ("ostypeid", Quirk::StringId),
    ("isdynamicallyscalable", Quirk::Bool),
    ("forced", Quirk::Bool),
];

/// Fix up all known quirks, recursively.
pub fn normalize(value: &mut Value) {
    match value {
        Value::Object(map) => normalize_object(map),
        Value::Array(items) => items.iter_mut().for_each(normalize),
        _ => {}
    }
}

fn normalize_object(map: &mut Map<String, Value>) {
    for (key, value) in map.iter_mut() {
        match QUIRKS.iter().find(|(name, _)| name == key) {
            Some((_, quirk)) => fix(key, value, *quirk),
            None => normalize(value),
        }
    }
}

fn fix(key: &str, value: &mut Value, quirk: Quirk) {
    let fixed = match (quirk, &*value) {
        (Quirk::Bool, Value::String(s)) => match s.to_lowercase().as_str() {
            "true" => Some(Value::Bool(true)),
            "false" => Some(Value::Bool(false)),
            _ => None,
        },
        (Quirk::StringId, Value::Number(n)) => match n.as_i64() {
            Some(i) => Some(Value::String(i.to_string())),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| Value::String((f as i64).to_string())),
        },
        _ => return,
    };

    match fixed {
        Some(fixed) => {
            trace!("Normalized field {} from {} to {}", key, value, fixed);
            *value = fixed;
        }
        None => debug!("Cannot normalize field {} with value {}", key, value),
    }
}

#[cfg(test)]
pub mod test {
    use serde_json::json;

    use super::normalize;

    #[test]
    fn test_success_as_string() {
        let mut value = json!({"success": "true", "displaytext": "ok"});
        normalize(&mut value);
        assert_eq!(value, json!({"success": true, "displaytext": "ok"}));

        let mut value = json!({"success": "FALSE"});
        normalize(&mut value);
        assert_eq!(value, json!({"success": false}));
    }

    #[test]
    fn test_success_as_bool_untouched() {
        let mut value = json!({"success": true});
        normalize(&mut value);
        assert_eq!(value, json!({"success": true}));
    }

    #[test]
    fn test_ostypeid_as_number() {
        let mut value = json!({"ostypeid": 142.0, "name": "x"});
        normalize(&mut value);
        assert_eq!(value, json!({"ostypeid": "142", "name": "x"}));

        let mut value = json!({"ostypeid": 7});
        normalize(&mut value);
        assert_eq!(value, json!({"ostypeid": "7"}));

        let mut value = json!({"ostypeid": "a4b1c2"});
        normalize(&mut value);
        assert_eq!(value, json!({"ostypeid": "a4b1c2"}));
    }

    #[test]
    fn test_fractional_ostypeid_kept() {
        let mut value = json!({"ostypeid": 1.5});
        normalize(&mut value);
        assert_eq!(value, json!({"ostypeid": 1.5}));
    }

    #[test]
    fn test_nested() {
        let mut value = json!({
            "count": 2,
            "guestos": [{"ostypeid": 1.0}, {"isdynamicallyscalable": "false"}],
            "jobresult": {"success": "true"}
        });
        normalize(&mut value);
        assert_eq!(
            value,
            json!({
                "count": 2,
                "guestos": [{"ostypeid": "1"}, {"isdynamicallyscalable": false}],
                "jobresult": {"success": true}
            })
        );
    }

    #[test]
    fn test_unknown_value_kept() {
        let mut value = json!({"success": "maybe"});
        normalize(&mut value);
        assert_eq!(value, json!({"success": "maybe"}));
    }
}
