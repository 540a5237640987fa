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

//! JSON structures of the storage pool API.

#![allow(missing_docs)]

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::super::common::protocol::deser_optional_timestamp;
use super::super::common::NamedResource;

protocol_enum! {
    #[doc = "Kind of a storage provider."]
    enum StorageProviderType {
        Primary = "primary",
        Image = "image"
    }
}

/// A primary storage pool.
#[derive(Debug, Clone, Deserialize)]
pub struct StoragePool {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default, rename = "type")]
    pub pool_type: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub hypervisor: Option<String>,
    #[serde(default, rename = "ipaddress")]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default, rename = "istagarule")]
    pub is_tag_a_rule: bool,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    #[serde(default, rename = "zonename")]
    pub zone_name: Option<String>,
    #[serde(default, rename = "podid")]
    pub pod_id: Option<String>,
    #[serde(default, rename = "clusterid")]
    pub cluster_id: Option<String>,
    #[serde(default, rename = "clustername")]
    pub cluster_name: Option<String>,
    #[serde(default, rename = "disksizetotal")]
    pub disk_size_total: i64,
    #[serde(default, rename = "disksizeallocated")]
    pub disk_size_allocated: i64,
    #[serde(default, rename = "disksizeused")]
    pub disk_size_used: i64,
    #[serde(default, rename = "capacityiops")]
    pub capacity_iops: Option<i64>,
    #[serde(default, rename = "overprovisionfactor")]
    pub over_provision_factor: Option<String>,
    #[serde(default)]
    pub managed: bool,
    #[serde(default, rename = "hasannotations")]
    pub has_annotations: bool,
    #[serde(default, deserialize_with = "deser_optional_timestamp")]
    pub created: Option<DateTime<FixedOffset>>,
}

list_response! {
    #[doc = "Response of `listStoragePools`."]
    StoragePoolList { storage_pools: StoragePool = "storagepool" }
}

/// A storage provider plugin.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageProvider {
    pub name: String,
    #[serde(rename = "type")]
    pub provider_type: StorageProviderType,
}

list_response! {
    #[doc = "Response of `listStorageProviders`."]
    StorageProviderList { providers: StorageProvider = "dataStoreProvider" }
}

impl StoragePool {
    /// Whether the pool is in maintenance mode.
    pub fn is_in_maintenance(&self) -> bool {
        self.state.as_deref() == Some("Maintenance")
    }
}

impl NamedResource for StoragePool {
    fn resource_id(&self) -> String {
        self.id.clone()
    }

    fn resource_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
pub mod test {
    use serde_json::json;

    use super::{StoragePoolList, StorageProviderList, StorageProviderType};

    #[test]
    fn test_decode_pools() {
        let list: StoragePoolList = serde_json::from_value(json!({
            "count": 1,
            "storagepool": [{
                "id": "p1",
                "name": "ceph-primary",
                "state": "Maintenance",
                "type": "RBD",
                "scope": "ZONE",
                "disksizetotal": 1099511627776i64,
                "disksizeused": 1024,
                "tags": "ssd,fast",
                "created": "2024-03-01T08:00:00+0000"
            }]
        }))
        .unwrap();
        let pool = &list.storage_pools[0];
        assert_eq!(pool.pool_type.as_deref(), Some("RBD"));
        assert_eq!(pool.disk_size_total, 1_099_511_627_776);
        assert_eq!(pool.disk_size_allocated, 0);
        assert!(pool.is_in_maintenance());
        assert!(pool.created.is_some());
    }

    #[test]
    fn test_decode_providers() {
        let list: StorageProviderList = serde_json::from_value(json!({
            "count": 2,
            "dataStoreProvider": [
                {"name": "DefaultPrimary", "type": "PRIMARY"},
                {"name": "ScaleIO", "type": "primary"}
            ]
        }))
        .unwrap();
        assert_eq!(list.providers.len(), 2);
        assert!(list
            .providers
            .iter()
            .all(|p| p.provider_type == StorageProviderType::Primary));
    }
}
