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

//! JSON structures of the Swift API.

#![allow(missing_docs)]

use serde::Deserialize;

/// An image store backed by Swift.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageStore {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default, rename = "providername")]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default, rename = "zoneid")]
    pub zone_id: Option<String>,
    #[serde(default, rename = "zonename")]
    pub zone_name: Option<String>,
    #[serde(default, rename = "readonly")]
    pub read_only: bool,
    #[serde(default, rename = "disksizetotal")]
    pub disk_size_total: Option<i64>,
    #[serde(default, rename = "disksizeused")]
    pub disk_size_used: Option<i64>,
}

list_response! {
    #[doc = "Response of `listSwifts`."]
    ImageStoreList { image_stores: ImageStore = "imagestore" }
}
