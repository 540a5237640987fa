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

//! Protocol bits shared between services.

#![allow(missing_docs)]

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::de::Error as DeserError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Timestamp format used by the management server, e.g. `2024-05-01T10:12:13+0000`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Response of commands that only report success.
///
/// Asynchronous commands also carry the job ID when the client does not
/// wait for them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuccessResponse {
    #[serde(default, rename = "jobid")]
    pub job_id: Option<String>,
    #[serde(default, rename = "displaytext")]
    pub display_text: Option<String>,
    #[serde(default)]
    pub success: bool,
}

/// A `key`/`value` entry of a details list.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyValue {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
}

pub fn deser_optional_timestamp<'de, D>(
    des: D,
) -> ::std::result::Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Deserialize::deserialize(des)?;
    match value {
        Some(ref s) if s.is_empty() => Ok(None),
        Some(s) => parse_timestamp(&s)
            .map(Some)
            .ok_or_else(|| DeserError::custom(format!("invalid timestamp {}", s))),
        None => Ok(None),
    }
}

/// Details that come either as an object or as a list of key/value pairs.
pub fn deser_details<'de, D>(des: D) -> ::std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Deserialize::deserialize(des)?;
    Ok(match value {
        Some(Value::Object(map)) => map
            .into_iter()
            .map(|(k, v)| {
                let v = match v {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (k, v)
            })
            .collect(),
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<KeyValue>(item).ok())
            .map(|kv| (kv.key, kv.value))
            .collect(),
        _ => BTreeMap::new(),
    })
}

#[cfg(test)]
pub mod test {
    use chrono::{Datelike, Timelike};
    use serde::Deserialize;
    use serde_json::json;

    use super::{deser_details, deser_optional_timestamp, parse_timestamp, SuccessResponse};

    #[derive(Debug, Deserialize)]
    struct Stamped {
        #[serde(default, deserialize_with = "deser_optional_timestamp")]
        created: Option<chrono::DateTime<chrono::FixedOffset>>,
        #[serde(default, deserialize_with = "deser_details")]
        details: std::collections::BTreeMap<String, String>,
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("2024-05-01T10:12:13+0200").unwrap();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.offset().local_minus_utc(), 7200);

        let ts = parse_timestamp("2024-05-01T10:12:13Z").unwrap();
        assert_eq!(ts.minute(), 12);

        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_deser_timestamp() {
        let value: Stamped =
            serde_json::from_value(json!({"created": "2023-01-02T03:04:05+0000"})).unwrap();
        assert_eq!(value.created.unwrap().day(), 2);

        let value: Stamped = serde_json::from_value(json!({"created": ""})).unwrap();
        assert!(value.created.is_none());

        let value: Stamped = serde_json::from_value(json!({})).unwrap();
        assert!(value.created.is_none());

        assert!(serde_json::from_value::<Stamped>(json!({"created": "never"})).is_err());
    }

    #[test]
    fn test_deser_details() {
        let value: Stamped =
            serde_json::from_value(json!({"details": {"a": "1", "b": 2}})).unwrap();
        assert_eq!(value.details.get("a").unwrap(), "1");
        assert_eq!(value.details.get("b").unwrap(), "2");

        let value: Stamped = serde_json::from_value(
            json!({"details": [{"key": "x", "value": "y"}, {"key": "z"}]}),
        )
        .unwrap();
        assert_eq!(value.details.get("x").unwrap(), "y");
        assert_eq!(value.details.get("z").unwrap(), "");
    }

    #[test]
    fn test_success_response() {
        let value: SuccessResponse =
            serde_json::from_value(json!({"success": true, "displaytext": "done"})).unwrap();
        assert!(value.success);
        assert_eq!(value.display_text.as_deref(), Some("done"));
        assert!(value.job_id.is_none());

        let value: SuccessResponse = serde_json::from_value(json!({"jobid": "abc"})).unwrap();
        assert!(!value.success);
        assert_eq!(value.job_id.as_deref(), Some("abc"));
    }
}
