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

//! JSON structures of the GPU API.

#![allow(missing_docs)]

use serde::Deserialize;

use super::super::common::NamedResource;

/// A GPU card model known to the cloud.
#[derive(Debug, Clone, Deserialize)]
pub struct GpuCard {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "deviceid")]
    pub device_id: String,
    #[serde(default, rename = "devicename")]
    pub device_name: String,
    #[serde(default, rename = "vendorid")]
    pub vendor_id: String,
    #[serde(default, rename = "vendorname")]
    pub vendor_name: String,
}

list_response! {
    #[doc = "Response of `listGpuCards`."]
    GpuCardList { gpu_cards: GpuCard = "gpucard" }
}

/// A vGPU profile of a GPU card.
#[derive(Debug, Clone, Deserialize)]
pub struct VgpuProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "gpucardid")]
    pub gpu_card_id: Option<String>,
    #[serde(default, rename = "gpucardname")]
    pub gpu_card_name: Option<String>,
    #[serde(default, rename = "videoram")]
    pub video_ram: Option<i64>,
    #[serde(default, rename = "maxheads")]
    pub max_heads: Option<i64>,
    #[serde(default, rename = "maxresolutionx")]
    pub max_resolution_x: Option<i64>,
    #[serde(default, rename = "maxresolutiony")]
    pub max_resolution_y: Option<i64>,
    #[serde(default, rename = "maxvgpuperphysicalgpu")]
    pub max_vgpu_per_physical_gpu: Option<i64>,
}

list_response! {
    #[doc = "Response of `listVgpuProfiles`."]
    VgpuProfileList { profiles: VgpuProfile = "vgpuprofile" }
}

/// A GPU device on a host.
#[derive(Debug, Clone, Deserialize)]
pub struct GpuDevice {
    pub id: String,
    #[serde(default, rename = "busaddress")]
    pub bus_address: Option<String>,
    #[serde(default, rename = "gpucardid")]
    pub gpu_card_id: Option<String>,
    #[serde(default, rename = "gpucardname")]
    pub gpu_card_name: Option<String>,
    #[serde(default, rename = "hostid")]
    pub host_id: Option<String>,
    #[serde(default, rename = "hostname")]
    pub host_name: Option<String>,
    #[serde(default, rename = "vgpuprofileid")]
    pub vgpu_profile_id: Option<String>,
    #[serde(default, rename = "vgpuprofilename")]
    pub vgpu_profile_name: Option<String>,
    #[serde(default, rename = "virtualmachineid")]
    pub virtual_machine_id: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, rename = "managedstate")]
    pub managed_state: Option<String>,
}

list_response! {
    #[doc = "Response of `listGpuDevices`."]
    GpuDeviceList { devices: GpuDevice = "gpudevice" }
}

impl GpuDevice {
    /// Whether the device is attached to a virtual machine.
    pub fn is_allocated(&self) -> bool {
        self.virtual_machine_id.is_some()
    }
}

impl NamedResource for GpuCard {
    fn resource_id(&self) -> String {
        self.id.clone()
    }

    fn resource_name(&self) -> &str {
        &self.name
    }
}
