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

//! Parameters of the storage pool commands.

use super::super::common::SuccessResponse;
use super::super::params::IndexedMap;
use super::protocol::{StoragePool, StoragePoolList, StorageProviderList, StorageProviderType};

command_params! {
    #[doc = "Parameters of `listStoragePools`."]
    ListStoragePools {
        #[doc = "ID of the cluster."]
        cluster_id, set_cluster_id, with_cluster_id, reset_cluster_id: String = "clusterid",
        #[doc = "ID of a host with access to the pool."]
        host_id, set_host_id, with_host_id, reset_host_id: String = "hostid",
        #[doc = "ID of the pool."]
        id, set_id, with_id, reset_id: String = "id",
        #[doc = "IP address of the pool."]
        ip_address, set_ip_address, with_ip_address, reset_ip_address: String = "ipaddress",
        #[doc = "Name of the pool."]
        name, set_name, with_name, reset_name: String = "name",
        #[doc = "Path of the pool."]
        path, set_path, with_path, reset_path: String = "path",
        #[doc = "ID of the pod."]
        pod_id, set_pod_id, with_pod_id, reset_pod_id: String = "podid",
        #[doc = "Scope of the pool (`ZONE`, `CLUSTER` or `HOST`)."]
        scope, set_scope, with_scope, reset_scope: String = "scope",
        #[doc = "State of the pool."]
        status, set_status, with_status, reset_status: String = "status",
        #[doc = "Include statistics reported by the storage driver."]
        storage_custom_stats, set_storage_custom_stats, with_storage_custom_stats,
            reset_storage_custom_stats: bool = "storagecustomstats",
        #[doc = "ID of the zone."]
        zone_id, set_zone_id, with_zone_id, reset_zone_id: String = "zoneid",
    }
}

impl ListStoragePools {
    /// List all pools.
    pub fn new() -> ListStoragePools {
        ListStoragePools::default()
    }
}

list_command!(ListStoragePools => StoragePoolList, "listStoragePools");

command_params! {
    #[doc = "Parameters of `updateStoragePool`."]
    UpdateStoragePool {
        #[doc = "New capacity in bytes."]
        capacity_bytes, set_capacity_bytes, with_capacity_bytes,
            reset_capacity_bytes: i64 = "capacitybytes",
        #[doc = "New IOPS capacity."]
        capacity_iops, set_capacity_iops, with_capacity_iops,
            reset_capacity_iops: i64 = "capacityiops",
        #[doc = "Driver specific details, sent as `details[0].<key>`."]
        details, set_details, with_details, reset_details: IndexedMap = "details",
        #[doc = "Enable or disable allocation from the pool."]
        enabled, set_enabled, with_enabled, reset_enabled: bool = "enabled",
        #[doc = "ID of the pool."]
        id, set_id, with_id, reset_id: String = "id",
        #[doc = "Whether the tags are a JavaScript rule."]
        is_tag_a_rule, set_is_tag_a_rule, with_is_tag_a_rule,
            reset_is_tag_a_rule: bool = "istagarule",
        #[doc = "New name of the pool."]
        name, set_name, with_name, reset_name: String = "name",
        #[doc = "Storage tags, replacing the current ones."]
        tags, set_tags, with_tags, reset_tags: Vec<String> = "tags",
        #[doc = "New URL of the pool."]
        url, set_url, with_url, reset_url: String = "url",
    }
}

impl UpdateStoragePool {
    /// Update the pool with the given ID.
    pub fn new<S: Into<String>>(id: S) -> UpdateStoragePool {
        UpdateStoragePool::default().with_id(id)
    }
}

api_command!(UpdateStoragePool => StoragePool, "updateStoragePool", nested = "storagepool");

command_params! {
    #[doc = "Parameters of `deleteStoragePool`."]
    DeleteStoragePool {
        #[doc = "Delete the pool even if it still holds destroyed volumes."]
        forced, set_forced, with_forced, reset_forced: bool = "forced",
        #[doc = "ID of the pool."]
        id, set_id, with_id, reset_id: String = "id",
    }
}

impl DeleteStoragePool {
    /// Delete the pool with the given ID.
    pub fn new<S: Into<String>>(id: S) -> DeleteStoragePool {
        DeleteStoragePool::default().with_id(id)
    }
}

api_command!(DeleteStoragePool => SuccessResponse, "deleteStoragePool");

command_params! {
    #[doc = "Parameters of `enableStorageMaintenance`."]
    EnableStorageMaintenance {
        #[doc = "ID of the pool."]
        id, set_id, with_id, reset_id: String = "id",
    }
}

impl EnableStorageMaintenance {
    /// Put the pool with the given ID into maintenance.
    pub fn new<S: Into<String>>(id: S) -> EnableStorageMaintenance {
        EnableStorageMaintenance::default().with_id(id)
    }
}

api_command!(
    EnableStorageMaintenance => StoragePool,
    "enableStorageMaintenance",
    asynchronous = true,
    nested = "storagepool",
);

command_params! {
    #[doc = "Parameters of `cancelStorageMaintenance`."]
    CancelStorageMaintenance {
        #[doc = "ID of the pool."]
        id, set_id, with_id, reset_id: String = "id",
    }
}

impl CancelStorageMaintenance {
    /// Take the pool with the given ID out of maintenance.
    pub fn new<S: Into<String>>(id: S) -> CancelStorageMaintenance {
        CancelStorageMaintenance::default().with_id(id)
    }
}

api_command!(
    CancelStorageMaintenance => StoragePool,
    "cancelStorageMaintenance",
    asynchronous = true,
    nested = "storagepool",
);

command_params! {
    #[doc = "Parameters of `listStorageProviders`."]
    ListStorageProviders {
        #[doc = "Kind of providers to list."]
        provider_type, set_provider_type, with_provider_type,
            reset_provider_type: String = "type",
    }
}

impl ListStorageProviders {
    /// List providers of the given kind.
    pub fn new(provider_type: StorageProviderType) -> ListStorageProviders {
        ListStorageProviders::default().with_provider_type(provider_type)
    }
}

list_command!(ListStorageProviders => StorageProviderList, "listStorageProviders");

#[cfg(test)]
pub mod test {
    use super::{ListStorageProviders, UpdateStoragePool};
    use crate::command::Command;
    use crate::params::IndexedMap;
    use crate::storage_pool::StorageProviderType;

    #[test]
    fn test_update_params() {
        let details: IndexedMap = vec![("iops", "5000")].into_iter().collect();
        let params = UpdateStoragePool::new("p1")
            .with_tags(vec!["ssd".to_string(), "fast".to_string()])
            .with_capacity_bytes(2_199_023_255_552i64)
            .with_details(details);
        assert_eq!(
            params.params().to_url_values(),
            vec![
                ("capacitybytes".to_string(), "2199023255552".to_string()),
                ("details[0].iops".to_string(), "5000".to_string()),
                ("id".to_string(), "p1".to_string()),
                ("tags".to_string(), "ssd,fast".to_string()),
            ]
        );
    }

    #[test]
    fn test_provider_type() {
        let params = ListStorageProviders::new(StorageProviderType::Image);
        assert_eq!(params.provider_type().as_deref(), Some("image"));
    }
}
