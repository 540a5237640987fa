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

//! JSON structures of the region API.

#![allow(missing_docs)]

use serde::Deserialize;

use super::super::common::NamedResource;

/// A region.
#[derive(Debug, Clone, Deserialize)]
pub struct Region {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default, rename = "gslbserviceenabled")]
    pub gslb_service_enabled: bool,
    #[serde(default, rename = "portableipserviceenabled")]
    pub portable_ip_service_enabled: bool,
}

list_response! {
    #[doc = "Response of `listRegions`."]
    RegionList { regions: Region = "region" }
}

impl NamedResource for Region {
    fn resource_id(&self) -> String {
        self.id.to_string()
    }

    fn resource_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
pub mod test {
    use serde_json::json;

    use super::{Region, RegionList};

    #[test]
    fn test_decode_list() {
        let list: RegionList = serde_json::from_value(json!({
            "count": 2,
            "region": [
                {"id": 1, "name": "Local", "endpoint": "http://localhost:8080/client/",
                 "gslbserviceenabled": true, "portableipserviceenabled": false},
                {"id": 2, "name": "region2", "endpoint": "http://region2/"}
            ]
        }))
        .unwrap();
        assert_eq!(list.count, 2);
        assert_eq!(list.regions.len(), 2);
        assert!(list.regions[0].gslb_service_enabled);
        assert_eq!(list.regions[1].name, "region2");
    }

    #[test]
    fn test_decode_requires_id() {
        assert!(serde_json::from_value::<Region>(json!({"name": "x"})).is_err());
    }
}
