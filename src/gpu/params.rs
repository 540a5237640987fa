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

//! Parameters of the GPU commands.

use super::super::common::SuccessResponse;
use super::protocol::{GpuCard, GpuCardList, GpuDeviceList, VgpuProfileList};

command_params! {
    #[doc = "Parameters of `createGpuCard`."]
    CreateGpuCard {
        #[doc = "PCI device ID of the card."]
        device_id, set_device_id, with_device_id, reset_device_id: String = "deviceid",
        #[doc = "PCI device name of the card."]
        device_name, set_device_name, with_device_name, reset_device_name: String = "devicename",
        #[doc = "Display name of the card."]
        name, set_name, with_name, reset_name: String = "name",
        #[doc = "PCI vendor ID of the card."]
        vendor_id, set_vendor_id, with_vendor_id, reset_vendor_id: String = "vendorid",
        #[doc = "PCI vendor name of the card."]
        vendor_name, set_vendor_name, with_vendor_name, reset_vendor_name: String = "vendorname",
        #[doc = "Video RAM in MiB of the default passthrough profile."]
        video_ram, set_video_ram, with_video_ram, reset_video_ram: i64 = "videoram",
    }
}

impl CreateGpuCard {
    /// Create parameters with all required fields.
    pub fn new<N, D, DN, V, VN>(
        name: N,
        device_id: D,
        device_name: DN,
        vendor_id: V,
        vendor_name: VN,
    ) -> CreateGpuCard
    where
        N: Into<String>,
        D: Into<String>,
        DN: Into<String>,
        V: Into<String>,
        VN: Into<String>,
    {
        CreateGpuCard::default()
            .with_name(name)
            .with_device_id(device_id)
            .with_device_name(device_name)
            .with_vendor_id(vendor_id)
            .with_vendor_name(vendor_name)
    }
}

api_command!(CreateGpuCard => GpuCard, "createGpuCard", nested = "gpucard");

command_params! {
    #[doc = "Parameters of `listGpuCards`."]
    ListGpuCards {
        #[doc = "Only cards with devices in use."]
        active_only, set_active_only, with_active_only, reset_active_only: bool = "activeonly",
        #[doc = "PCI device ID of the card."]
        device_id, set_device_id, with_device_id, reset_device_id: String = "deviceid",
        #[doc = "PCI device name of the card."]
        device_name, set_device_name, with_device_name, reset_device_name: String = "devicename",
        #[doc = "ID of the card."]
        id, set_id, with_id, reset_id: String = "id",
        #[doc = "Name of the card."]
        name, set_name, with_name, reset_name: String = "name",
        #[doc = "PCI vendor ID of the card."]
        vendor_id, set_vendor_id, with_vendor_id, reset_vendor_id: String = "vendorid",
        #[doc = "PCI vendor name of the card."]
        vendor_name, set_vendor_name, with_vendor_name, reset_vendor_name: String = "vendorname",
    }
}

impl ListGpuCards {
    /// List all cards.
    pub fn new() -> ListGpuCards {
        ListGpuCards::default()
    }
}

list_command!(ListGpuCards => GpuCardList, "listGpuCards");

command_params! {
    #[doc = "Parameters of `deleteGpuCard`."]
    DeleteGpuCard {
        #[doc = "ID of the card."]
        id, set_id, with_id, reset_id: String = "id",
    }
}

impl DeleteGpuCard {
    /// Delete the card with the given ID.
    pub fn new<S: Into<String>>(id: S) -> DeleteGpuCard {
        DeleteGpuCard::default().with_id(id)
    }
}

api_command!(DeleteGpuCard => SuccessResponse, "deleteGpuCard");

command_params! {
    #[doc = "Parameters of `listVgpuProfiles`."]
    ListVgpuProfiles {
        #[doc = "Only profiles with devices in use."]
        active_only, set_active_only, with_active_only, reset_active_only: bool = "activeonly",
        #[doc = "ID of the GPU card."]
        gpu_card_id, set_gpu_card_id, with_gpu_card_id, reset_gpu_card_id: String = "gpucardid",
        #[doc = "ID of the profile."]
        id, set_id, with_id, reset_id: String = "id",
        #[doc = "Name of the profile."]
        name, set_name, with_name, reset_name: String = "name",
    }
}

impl ListVgpuProfiles {
    /// List all profiles.
    pub fn new() -> ListVgpuProfiles {
        ListVgpuProfiles::default()
    }
}

list_command!(ListVgpuProfiles => VgpuProfileList, "listVgpuProfiles");

command_params! {
    #[doc = "Parameters of `listGpuDevices`."]
    ListGpuDevices {
        #[doc = "ID of the GPU card."]
        gpu_card_id, set_gpu_card_id, with_gpu_card_id, reset_gpu_card_id: String = "gpucardid",
        #[doc = "ID of the host."]
        host_id, set_host_id, with_host_id, reset_host_id: String = "hostid",
        #[doc = "ID of the device."]
        id, set_id, with_id, reset_id: String = "id",
        #[doc = "ID of the vGPU profile."]
        vgpu_profile_id, set_vgpu_profile_id, with_vgpu_profile_id,
            reset_vgpu_profile_id: String = "vgpuprofileid",
        #[doc = "ID of the virtual machine using the device."]
        virtual_machine_id, set_virtual_machine_id, with_virtual_machine_id,
            reset_virtual_machine_id: String = "virtualmachineid",
    }
}

impl ListGpuDevices {
    /// List all devices.
    pub fn new() -> ListGpuDevices {
        ListGpuDevices::default()
    }
}

list_command!(ListGpuDevices => GpuDeviceList, "listGpuDevices");
