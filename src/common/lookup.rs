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

//! Resolving a list result to exactly one resource.

use std::fmt::Debug;

use super::super::{Error, ErrorKind, Result};

/// A resource with an ID and a name.
pub trait NamedResource {
    /// Resource ID as a string.
    fn resource_id(&self) -> String;

    /// Resource name.
    fn resource_name(&self) -> &str;
}

/// Pick the resource with the given name from a list result.
///
/// Several results are accepted only if exactly one of them has this exact
/// name (the server matches names as substrings in some commands).
pub fn one_by_name<T>(name: &str, items: Vec<T>) -> Result<T>
where
    T: NamedResource + Debug,
{
    one_matching("name", name, items, |item| item.resource_name() == name)
}

/// Pick the resource with the given ID from a list result.
pub fn one_by_id<T>(id: &str, items: Vec<T>) -> Result<T>
where
    T: NamedResource + Debug,
{
    one_matching("id", id, items, |item| item.resource_id() == id)
}

fn one_matching<T, F>(field: &str, key: &str, mut items: Vec<T>, matches: F) -> Result<T>
where
    T: Debug,
    F: Fn(&T) -> bool,
{
    match items.len() {
        0 => {
            debug!("No resources with {} {}", field, key);
            Err(Error::new(
                ErrorKind::ResourceNotFound,
                format!("No match found for {}: count == 0, {:?}", key, items),
            ))
        }
        1 => Ok(items.remove(0)),
        count => {
            let mut exact: Vec<usize> = items
                .iter()
                .enumerate()
                .filter(|(_, item)| matches(item))
                .map(|(idx, _)| idx)
                .collect();
            if exact.len() == 1 {
                debug!(
                    "Picked the only exact match for {} {} out of {} results",
                    field, key, count
                );
                Ok(items.swap_remove(exact.remove(0)))
            } else {
                Err(Error::new(
                    ErrorKind::TooManyItems,
                    format!(
                        "Could not find an exact match for {}: count == {}, {:?}",
                        key, count, items
                    ),
                ))
            }
        }
    }
}

#[cfg(test)]
pub mod test {
    use super::{one_by_id, one_by_name, NamedResource};
    use crate::ErrorKind;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        name: &'static str,
    }

    impl NamedResource for Item {
        fn resource_id(&self) -> String {
            self.id.to_string()
        }

        fn resource_name(&self) -> &str {
            self.name
        }
    }

    fn item(id: u32, name: &'static str) -> Item {
        Item { id, name }
    }

    #[test]
    fn test_zero_matches() {
        let err = one_by_name::<Item>("region2", Vec::new()).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
        let message = err.message().unwrap();
        assert!(message.contains("region2"));
        assert!(message.contains("count == 0"));
    }

    #[test]
    fn test_single_match() {
        let found = one_by_name("region2", vec![item(2, "region2")]).unwrap();
        assert_eq!(found, item(2, "region2"));
    }

    #[test]
    fn test_exact_name_among_many() {
        let found = one_by_name(
            "region2",
            vec![item(1, "region20"), item(2, "region2"), item(3, "my-region2")],
        )
        .unwrap();
        assert_eq!(found.id, 2);
    }

    #[test]
    fn test_ambiguous() {
        let err = one_by_name("region", vec![item(1, "region1"), item(2, "region2")])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::TooManyItems);
        let message = err.message().unwrap();
        assert!(message.contains("region"));
        assert!(message.contains("count == 2"));
        assert!(message.contains("region1"));

        let err = one_by_name("dup", vec![item(1, "dup"), item(2, "dup")])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::TooManyItems);
    }

    #[test]
    fn test_by_id() {
        let found = one_by_id("3", vec![item(1, "a"), item(3, "b")]).unwrap();
        assert_eq!(found.name, "b");
        let err = one_by_id("3", Vec::<Item>::new()).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    }
}
