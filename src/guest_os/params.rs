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

//! Parameters of the guest OS commands.

use super::super::common::SuccessResponse;
use super::super::params::KeyValueMap;
use super::protocol::{GuestOsMapping, GuestOsMappingList, OsCategoryList, OsType, OsTypeList};

command_params! {
    #[doc = "Parameters of `listOsTypes`."]
    ListOsTypes {
        #[doc = "Description of the OS type."]
        description, set_description, with_description, reset_description: String = "description",
        #[doc = "Only types the end users can see."]
        for_display, set_for_display, with_for_display, reset_for_display: bool = "fordisplay",
        #[doc = "ID of the OS type."]
        id, set_id, with_id, reset_id: String = "id",
        #[doc = "Only types of this category."]
        os_category_id, set_os_category_id, with_os_category_id,
            reset_os_category_id: String = "oscategoryid",
    }
}

impl ListOsTypes {
    /// List all OS types.
    pub fn new() -> ListOsTypes {
        ListOsTypes::default()
    }
}

list_command!(ListOsTypes => OsTypeList, "listOsTypes");

command_params! {
    #[doc = "Parameters of `listOsCategories`."]
    ListOsCategories {
        #[doc = "ID of the category."]
        id, set_id, with_id, reset_id: String = "id",
        #[doc = "Only featured categories."]
        is_featured, set_is_featured, with_is_featured, reset_is_featured: bool = "isfeatured",
        #[doc = "Name of the category."]
        name, set_name, with_name, reset_name: String = "name",
    }
}

impl ListOsCategories {
    /// List all categories.
    pub fn new() -> ListOsCategories {
        ListOsCategories::default()
    }
}

list_command!(ListOsCategories => OsCategoryList, "listOsCategories");

command_params! {
    #[doc = "Parameters of `addGuestOs`."]
    AddGuestOs {
        #[doc = "Extra details, sent as key/value pairs."]
        details, set_details, with_details, reset_details: KeyValueMap = "details",
        #[doc = "Whether end users can see the OS."]
        for_display, set_for_display, with_for_display, reset_for_display: bool = "fordisplay",
        #[doc = "Optional name of the OS."]
        name, set_name, with_name, reset_name: String = "name",
        #[doc = "Category of the OS."]
        os_category_id, set_os_category_id, with_os_category_id,
            reset_os_category_id: String = "oscategoryid",
        #[doc = "Display name of the OS."]
        os_display_name, set_os_display_name, with_os_display_name,
            reset_os_display_name: String = "osdisplayname",
    }
}

impl AddGuestOs {
    /// Add an OS to a category.
    pub fn new<C, N>(os_category_id: C, os_display_name: N) -> AddGuestOs
    where
        C: Into<String>,
        N: Into<String>,
    {
        AddGuestOs::default()
            .with_os_category_id(os_category_id)
            .with_os_display_name(os_display_name)
    }
}

api_command!(AddGuestOs => OsType, "addGuestOs", asynchronous = true, nested = "guestos");

command_params! {
    #[doc = "Parameters of `updateGuestOs`."]
    UpdateGuestOs {
        #[doc = "Extra details, sent as key/value pairs."]
        details, set_details, with_details, reset_details: KeyValueMap = "details",
        #[doc = "Whether end users can see the OS."]
        for_display, set_for_display, with_for_display, reset_for_display: bool = "fordisplay",
        #[doc = "ID of the OS."]
        id, set_id, with_id, reset_id: String = "id",
        #[doc = "New category of the OS."]
        os_category_id, set_os_category_id, with_os_category_id,
            reset_os_category_id: String = "oscategoryid",
        #[doc = "Display name of the OS."]
        os_display_name, set_os_display_name, with_os_display_name,
            reset_os_display_name: String = "osdisplayname",
    }
}

impl UpdateGuestOs {
    /// Update an OS.
    pub fn new<I, N>(id: I, os_display_name: N) -> UpdateGuestOs
    where
        I: Into<String>,
        N: Into<String>,
    {
        UpdateGuestOs::default()
            .with_id(id)
            .with_os_display_name(os_display_name)
    }
}

api_command!(UpdateGuestOs => OsType, "updateGuestOs", asynchronous = true, nested = "guestos");

command_params! {
    #[doc = "Parameters of `removeGuestOs`."]
    RemoveGuestOs {
        #[doc = "ID of the OS."]
        id, set_id, with_id, reset_id: String = "id",
    }
}

impl RemoveGuestOs {
    /// Remove a user defined OS.
    pub fn new<S: Into<String>>(id: S) -> RemoveGuestOs {
        RemoveGuestOs::default().with_id(id)
    }
}

api_command!(RemoveGuestOs => SuccessResponse, "removeGuestOs", asynchronous = true);

command_params! {
    #[doc = "Parameters of `listGuestOsMapping`."]
    ListGuestOsMapping {
        #[doc = "Hypervisor of the mapping."]
        hypervisor, set_hypervisor, with_hypervisor, reset_hypervisor: String = "hypervisor",
        #[doc = "Hypervisor version of the mapping."]
        hypervisor_version, set_hypervisor_version, with_hypervisor_version,
            reset_hypervisor_version: String = "hypervisorversion",
        #[doc = "ID of the mapping."]
        id, set_id, with_id, reset_id: String = "id",
        #[doc = "Display name of the OS."]
        os_display_name, set_os_display_name, with_os_display_name,
            reset_os_display_name: String = "osdisplayname",
        #[doc = "Name of the OS on the hypervisor."]
        os_name_for_hypervisor, set_os_name_for_hypervisor, with_os_name_for_hypervisor,
            reset_os_name_for_hypervisor: String = "osnameforhypervisor",
        #[doc = "ID of the OS type."]
        os_type_id, set_os_type_id, with_os_type_id, reset_os_type_id: String = "ostypeid",
    }
}

impl ListGuestOsMapping {
    /// List all mappings.
    pub fn new() -> ListGuestOsMapping {
        ListGuestOsMapping::default()
    }
}

list_command!(ListGuestOsMapping => GuestOsMappingList, "listGuestOsMapping");

command_params! {
    #[doc = "Parameters of `addGuestOsMapping`."]
    AddGuestOsMapping {
        #[doc = "Add the mapping even if the hypervisor does not know the OS name."]
        forced, set_forced, with_forced, reset_forced: bool = "forced",
        #[doc = "Hypervisor of the mapping."]
        hypervisor, set_hypervisor, with_hypervisor, reset_hypervisor: String = "hypervisor",
        #[doc = "Hypervisor version of the mapping."]
        hypervisor_version, set_hypervisor_version, with_hypervisor_version,
            reset_hypervisor_version: String = "hypervisorversion",
        #[doc = "Check the OS name against the hypervisor."]
        os_mapping_check_enabled, set_os_mapping_check_enabled, with_os_mapping_check_enabled,
            reset_os_mapping_check_enabled: bool = "osmappingcheckenabled",
        #[doc = "Display name of the OS, alternative to the OS type ID."]
        os_display_name, set_os_display_name, with_os_display_name,
            reset_os_display_name: String = "osdisplayname",
        #[doc = "Name of the OS on the hypervisor."]
        os_name_for_hypervisor, set_os_name_for_hypervisor, with_os_name_for_hypervisor,
            reset_os_name_for_hypervisor: String = "osnameforhypervisor",
        #[doc = "ID of the OS type."]
        os_type_id, set_os_type_id, with_os_type_id, reset_os_type_id: String = "ostypeid",
    }
}

impl AddGuestOsMapping {
    /// Map an OS to its name on a hypervisor version.
    pub fn new<H, V, N>(
        hypervisor: H,
        hypervisor_version: V,
        os_name_for_hypervisor: N,
    ) -> AddGuestOsMapping
    where
        H: Into<String>,
        V: Into<String>,
        N: Into<String>,
    {
        AddGuestOsMapping::default()
            .with_hypervisor(hypervisor)
            .with_hypervisor_version(hypervisor_version)
            .with_os_name_for_hypervisor(os_name_for_hypervisor)
    }
}

api_command!(
    AddGuestOsMapping => GuestOsMapping,
    "addGuestOsMapping",
    asynchronous = true,
    nested = "guestosmapping",
);

command_params! {
    #[doc = "Parameters of `removeGuestOsMapping`."]
    RemoveGuestOsMapping {
        #[doc = "ID of the mapping."]
        id, set_id, with_id, reset_id: String = "id",
    }
}

impl RemoveGuestOsMapping {
    /// Remove a user defined mapping.
    pub fn new<S: Into<String>>(id: S) -> RemoveGuestOsMapping {
        RemoveGuestOsMapping::default().with_id(id)
    }
}

api_command!(RemoveGuestOsMapping => SuccessResponse, "removeGuestOsMapping", asynchronous = true);
