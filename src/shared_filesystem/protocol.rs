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

//! JSON structures of the shared file system API.

#![allow(missing_docs)]

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::super::common::protocol::deser_optional_timestamp;
use super::super::common::NamedResource;

protocol_enum! {
    #[doc = "File system to format the volume with."]
    enum FileSystemType {
        Ext4 = "EXT4",
        Xfs = "XFS"
    }
}

/// A shared file system.
#[derive(Debug, Clone, Deserialize)]
pub struct SharedFileSystem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, rename = "filesystem")]
    pub file_system: Option<FileSystemType>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, rename = "size")]
    pub size_bytes: Option<i64>,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    #[serde(default, rename = "zonename")]
    pub zone_name: Option<String>,
    #[serde(default, rename = "networkid")]
    pub network_id: Option<String>,
    #[serde(default, rename = "virtualmachineid")]
    pub virtual_machine_id: Option<String>,
    #[serde(default, rename = "vmstate")]
    pub vm_state: Option<String>,
    #[serde(default, rename = "volumeid")]
    pub volume_id: Option<String>,
    #[serde(default, rename = "diskofferingid")]
    pub disk_offering_id: Option<String>,
    #[serde(default, rename = "serviceofferingid")]
    pub service_offering_id: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default, rename = "domainid")]
    pub domain_id: Option<String>,
    #[serde(default, deserialize_with = "deser_optional_timestamp")]
    pub created: Option<DateTime<FixedOffset>>,
}

list_response! {
    #[doc = "Response of `listSharedFileSystems`."]
    SharedFileSystemList { file_systems: SharedFileSystem = "sharedfilesystem" }
}

/// A provider of shared file systems.
#[derive(Debug, Clone, Deserialize)]
pub struct SharedFileSystemProvider {
    pub name: String,
}

list_response! {
    #[doc = "Response of `listSharedFileSystemProviders`."]
    SharedFileSystemProviderList {
        providers: SharedFileSystemProvider = "sharedfilesystemprovider"
    }
}

impl NamedResource for SharedFileSystem {
    fn resource_id(&self) -> String {
        self.id.clone()
    }

    fn resource_name(&self) -> &str {
        &self.name
    }
}
