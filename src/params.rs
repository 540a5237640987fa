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

//! Command parameters and their wire encoding.
//!
//! Every command keeps its parameters in a [ParameterBag](struct.ParameterBag.html):
//! a map from the parameter name to a typed [ParamValue](enum.ParamValue.html).
//! Generated parameter structs wrap a bag and expose typed accessors, so most
//! users never touch the bag directly.

use std::collections::{BTreeMap, HashMap};
use std::iter::FromIterator;

/// How a string-to-string map is flattened into request parameters.
///
/// CloudStack is not consistent here, each command documents its own shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapShape {
    /// `name[i].key=<key>` and `name[i].value=<value>` pairs.
    KeyValue,
    /// `name[i].<key>=<value>` entries.
    Indexed,
}

/// A single typed parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A string.
    String(String),
    /// A boolean, encoded as `true` or `false`.
    Bool(bool),
    /// A 32-bit integer.
    Int(i32),
    /// A 64-bit integer.
    Int64(i64),
    /// A list of strings, encoded comma-separated.
    StringList(Vec<String>),
    /// A map of strings, flattened according to its shape.
    StringMap(BTreeMap<String, String>, MapShape),
}

/// A map parameter flattened as `name[i].<key>=<value>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexedMap(pub BTreeMap<String, String>);

/// A map parameter flattened as `name[i].key`/`name[i].value` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueMap(pub BTreeMap<String, String>);

/// A Rust type that can be stored in a `ParameterBag`.
pub trait ParamType: Sized {
    /// Convert into a tagged value.
    fn into_value(self) -> ParamValue;

    /// Extract from a tagged value, `None` on type mismatch.
    fn from_value(value: &ParamValue) -> Option<Self>;
}

/// Typed parameters of a single command.
///
/// Holds at most one value per name. Absent parameters are omitted from
/// the encoded request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterBag {
    values: BTreeMap<String, ParamValue>,
}

impl ParameterBag {
    /// Create an empty bag.
    pub fn new() -> ParameterBag {
        ParameterBag::default()
    }

    /// Store a value, overwriting any previous value with the same name.
    pub fn set<K: Into<String>, T: ParamType>(&mut self, name: K, value: T) {
        let _ = self.values.insert(name.into(), value.into_value());
    }

    /// Store an already tagged value.
    pub fn set_value<K: Into<String>>(&mut self, name: K, value: ParamValue) {
        let _ = self.values.insert(name.into(), value);
    }

    /// Get a typed value.
    ///
    /// Returns `None` if the value is absent or has a different type.
    pub fn get<T: ParamType>(&self, name: &str) -> Option<T> {
        self.values.get(name).and_then(T::from_value)
    }

    /// Get a tagged value.
    #[inline]
    pub fn value(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Remove a value.
    pub fn reset(&mut self, name: &str) {
        let _ = self.values.remove(name);
    }

    /// Whether a value is present.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Whether the bag is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of stored parameters (before map flattening).
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Encode the bag into request parameters.
    ///
    /// Values are not percent-encoded yet. The output only depends on the
    /// logical content of the bag: names and map keys are visited in
    /// sorted order.
    pub fn to_url_values(&self) -> Vec<(String, String)> {
        let mut result = Vec::with_capacity(self.values.len());
        for (name, value) in &self.values {
            match value {
                ParamValue::String(s) => result.push((name.clone(), s.clone())),
                ParamValue::Bool(b) => result.push((name.clone(), b.to_string())),
                ParamValue::Int(i) => result.push((name.clone(), i.to_string())),
                ParamValue::Int64(i) => result.push((name.clone(), i.to_string())),
                ParamValue::StringList(items) => result.push((name.clone(), items.join(","))),
                ParamValue::StringMap(map, MapShape::KeyValue) => {
                    for (idx, (key, value)) in map.iter().enumerate() {
                        result.push((format!("{}[{}].key", name, idx), key.clone()));
                        result.push((format!("{}[{}].value", name, idx), value.clone()));
                    }
                }
                ParamValue::StringMap(map, MapShape::Indexed) => {
                    for (idx, (key, value)) in map.iter().enumerate() {
                        result.push((format!("{}[{}].{}", name, idx, key), value.clone()));
                    }
                }
            }
        }
        result
    }
}

impl ParamType for String {
    fn into_value(self) -> ParamValue {
        ParamValue::String(self)
    }

    fn from_value(value: &ParamValue) -> Option<String> {
        match value {
            ParamValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl ParamType for bool {
    fn into_value(self) -> ParamValue {
        ParamValue::Bool(self)
    }

    fn from_value(value: &ParamValue) -> Option<bool> {
        match value {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl ParamType for i32 {
    fn into_value(self) -> ParamValue {
        ParamValue::Int(self)
    }

    fn from_value(value: &ParamValue) -> Option<i32> {
        match value {
            ParamValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl ParamType for i64 {
    fn into_value(self) -> ParamValue {
        ParamValue::Int64(self)
    }

    fn from_value(value: &ParamValue) -> Option<i64> {
        match value {
            ParamValue::Int64(i) => Some(*i),
            _ => None,
        }
    }
}

impl ParamType for Vec<String> {
    fn into_value(self) -> ParamValue {
        ParamValue::StringList(self)
    }

    fn from_value(value: &ParamValue) -> Option<Vec<String>> {
        match value {
            ParamValue::StringList(items) => Some(items.clone()),
            _ => None,
        }
    }
}

impl ParamType for IndexedMap {
    fn into_value(self) -> ParamValue {
        ParamValue::StringMap(self.0, MapShape::Indexed)
    }

    fn from_value(value: &ParamValue) -> Option<IndexedMap> {
        match value {
            ParamValue::StringMap(map, MapShape::Indexed) => Some(IndexedMap(map.clone())),
            _ => None,
        }
    }
}

impl ParamType for KeyValueMap {
    fn into_value(self) -> ParamValue {
        ParamValue::StringMap(self.0, MapShape::KeyValue)
    }

    fn from_value(value: &ParamValue) -> Option<KeyValueMap> {
        match value {
            ParamValue::StringMap(map, MapShape::KeyValue) => Some(KeyValueMap(map.clone())),
            _ => None,
        }
    }
}

macro_rules! string_map_conversions {
    ($name:ident) => {
        impl From<BTreeMap<String, String>> for $name {
            fn from(value: BTreeMap<String, String>) -> $name {
                $name(value)
            }
        }

        impl From<HashMap<String, String>> for $name {
            fn from(value: HashMap<String, String>) -> $name {
                $name(value.into_iter().collect())
            }
        }

        impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for $name {
            fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> $name {
                $name(
                    iter.into_iter()
                        .map(|(k, v)| (k.into(), v.into()))
                        .collect(),
                )
            }
        }

        impl $name {
            /// Get a value by its key.
            #[inline]
            pub fn get(&self, key: &str) -> Option<&str> {
                self.0.get(key).map(String::as_str)
            }
        }
    };
}

string_map_conversions!(IndexedMap);
string_map_conversions!(KeyValueMap);

#[cfg(test)]
pub mod test {
    #![allow(unused_results)]

    use std::collections::HashMap;

    use super::{IndexedMap, KeyValueMap, MapShape, ParamValue, ParameterBag};

    #[test]
    fn test_set_get_reset() {
        let mut bag = ParameterBag::new();
        bag.set("name", "region2".to_string());
        bag.set("id", 2i32);
        bag.set("size", 10i64);
        bag.set("forced", true);
        bag.set("ids", vec!["a".to_string(), "b".to_string()]);

        assert_eq!(bag.get::<String>("name"), Some("region2".to_string()));
        assert_eq!(bag.get::<i32>("id"), Some(2));
        assert_eq!(bag.get::<i64>("size"), Some(10));
        assert_eq!(bag.get::<bool>("forced"), Some(true));
        assert_eq!(
            bag.get::<Vec<String>>("ids"),
            Some(vec!["a".to_string(), "b".to_string()])
        );

        bag.reset("name");
        assert_eq!(bag.get::<String>("name"), None);
        assert!(!bag.contains("name"));
        assert_eq!(bag.len(), 4);
    }

    #[test]
    fn test_type_mismatch() {
        let mut bag = ParameterBag::new();
        bag.set("id", 2i32);
        assert_eq!(bag.get::<i64>("id"), None);
        assert_eq!(bag.get::<String>("id"), None);
        assert_eq!(bag.get::<String>("missing"), None);
    }

    #[test]
    fn test_overwrite() {
        let mut bag = ParameterBag::new();
        bag.set("name", "a".to_string());
        bag.set("name", 42i32);
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.value("name"), Some(&ParamValue::Int(42)));
    }

    #[test]
    fn test_encode_scalars() {
        let mut bag = ParameterBag::new();
        bag.set("forced", false);
        bag.set("cleanup", true);
        bag.set("id", -3i32);
        bag.set("size", 1099511627776i64);
        bag.set("ids", vec!["a".to_string(), "b".to_string(), "c".to_string()]);

        let values = bag.to_url_values();
        assert_eq!(
            values,
            vec![
                ("cleanup".to_string(), "true".to_string()),
                ("forced".to_string(), "false".to_string()),
                ("id".to_string(), "-3".to_string()),
                ("ids".to_string(), "a,b,c".to_string()),
                ("size".to_string(), "1099511627776".to_string()),
            ]
        );
    }

    #[test]
    fn test_encode_key_value_map() {
        let mut bag = ParameterBag::new();
        let tags: KeyValueMap = vec![("zone", "a"), ("env", "prod")].into_iter().collect();
        bag.set("tags", tags);

        assert_eq!(
            bag.to_url_values(),
            vec![
                ("tags[0].key".to_string(), "env".to_string()),
                ("tags[0].value".to_string(), "prod".to_string()),
                ("tags[1].key".to_string(), "zone".to_string()),
                ("tags[1].value".to_string(), "a".to_string()),
            ]
        );
    }

    #[test]
    fn test_encode_indexed_map_is_deterministic() {
        let mut source = HashMap::new();
        for (k, v) in &[("memory", "1024"), ("cpu", "2"), ("speed", "1000"), ("arch", "x86")] {
            source.insert(k.to_string(), v.to_string());
        }

        let mut first = ParameterBag::new();
        first.set("details", IndexedMap::from(source.clone()));
        let mut second = ParameterBag::new();
        second.set("details", IndexedMap::from(source));

        let encoded = first.to_url_values();
        assert_eq!(encoded, second.to_url_values());
        assert_eq!(
            encoded,
            vec![
                ("details[0].arch".to_string(), "x86".to_string()),
                ("details[1].cpu".to_string(), "2".to_string()),
                ("details[2].memory".to_string(), "1024".to_string()),
                ("details[3].speed".to_string(), "1000".to_string()),
            ]
        );
    }

    #[test]
    fn test_map_shape_is_part_of_type() {
        let mut bag = ParameterBag::new();
        bag.set("details", IndexedMap::default());
        assert!(bag.get::<KeyValueMap>("details").is_none());
        assert!(bag.get::<IndexedMap>("details").is_some());
        assert_eq!(
            bag.value("details"),
            Some(&ParamValue::StringMap(Default::default(), MapShape::Indexed))
        );
    }

    #[test]
    fn test_absent_is_omitted() {
        let mut bag = ParameterBag::new();
        bag.set("name", "x".to_string());
        bag.reset("name");
        bag.set("details", IndexedMap::default());
        assert!(bag.to_url_values().is_empty());
    }
}
