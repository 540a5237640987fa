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

//! JSON structures of the guest OS API.
//!
//! Older management servers send `ostypeid` as a number, it is always
//! decoded as a string here.

#![allow(missing_docs)]

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::super::common::protocol::{deser_details, deser_optional_timestamp};
use super::super::common::NamedResource;

/// A guest OS type.
#[derive(Debug, Clone, Deserialize)]
pub struct OsType {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "oscategoryid")]
    pub os_category_id: Option<String>,
    #[serde(default, rename = "oscategoryname")]
    pub os_category_name: Option<String>,
    #[serde(default, rename = "isuserdefined")]
    pub is_user_defined: bool,
    #[serde(default, rename = "fordisplay")]
    pub for_display: Option<bool>,
    #[serde(default, deserialize_with = "deser_details")]
    pub details: BTreeMap<String, String>,
}

list_response! {
    #[doc = "Response of `listOsTypes`."]
    OsTypeList { os_types: OsType = "ostype" }
}

/// A category of guest OS types.
#[derive(Debug, Clone, Deserialize)]
pub struct OsCategory {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "isfeatured")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "deser_optional_timestamp")]
    pub created: Option<DateTime<FixedOffset>>,
}

list_response! {
    #[doc = "Response of `listOsCategories`."]
    OsCategoryList { os_categories: OsCategory = "oscategory" }
}

/// Name of a guest OS for a specific hypervisor version.
#[derive(Debug, Clone, Deserialize)]
pub struct GuestOsMapping {
    pub id: String,
    #[serde(default)]
    pub hypervisor: String,
    #[serde(default, rename = "hypervisorversion")]
    pub hypervisor_version: String,
    #[serde(default, rename = "osdisplayname")]
    pub os_display_name: Option<String>,
    #[serde(default, rename = "osnameforhypervisor")]
    pub os_name_for_hypervisor: String,
    #[serde(default, rename = "ostypeid")]
    pub os_type_id: Option<String>,
    #[serde(default, rename = "isuserdefined")]
    pub is_user_defined: bool,
}

list_response! {
    #[doc = "Response of `listGuestOsMapping`."]
    GuestOsMappingList { mappings: GuestOsMapping = "guestosmapping" }
}

impl NamedResource for OsType {
    fn resource_id(&self) -> String {
        self.id.clone()
    }

    fn resource_name(&self) -> &str {
        &self.description
    }
}

impl NamedResource for OsCategory {
    fn resource_id(&self) -> String {
        self.id.clone()
    }

    fn resource_name(&self) -> &str {
        &self.name
    }
}
