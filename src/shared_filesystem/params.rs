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

//! Parameters of the shared file system commands.

use super::super::common::SuccessResponse;
use super::protocol::{
    FileSystemType, SharedFileSystem, SharedFileSystemList, SharedFileSystemProviderList,
};

command_params! {
    #[doc = "Parameters of `createSharedFileSystem`."]
    CreateSharedFileSystem {
        #[doc = "Owner account, requires `domain_id`."]
        account, set_account, with_account, reset_account: String = "account",
        #[doc = "Description of the file system."]
        description, set_description, with_description, reset_description: String = "description",
        #[doc = "Disk offering of the data volume."]
        disk_offering_id, set_disk_offering_id, with_disk_offering_id,
            reset_disk_offering_id: String = "diskofferingid",
        #[doc = "Domain of the owner."]
        domain_id, set_domain_id, with_domain_id, reset_domain_id: String = "domainid",
        #[doc = "File system type."]
        file_system, set_file_system, with_file_system, reset_file_system: String = "filesystem",
        #[doc = "Maximum IOPS of the data volume."]
        max_iops, set_max_iops, with_max_iops, reset_max_iops: i64 = "maxiops",
        #[doc = "Minimum IOPS of the data volume."]
        min_iops, set_min_iops, with_min_iops, reset_min_iops: i64 = "miniops",
        #[doc = "Name of the file system."]
        name, set_name, with_name, reset_name: String = "name",
        #[doc = "Network to attach the storage VM to."]
        network_id, set_network_id, with_network_id, reset_network_id: String = "networkid",
        #[doc = "Owner project."]
        project_id, set_project_id, with_project_id, reset_project_id: String = "projectid",
        #[doc = "Name of the provider."]
        provider, set_provider, with_provider, reset_provider: String = "provider",
        #[doc = "Service offering of the storage VM."]
        service_offering_id, set_service_offering_id, with_service_offering_id,
            reset_service_offering_id: String = "serviceofferingid",
        #[doc = "Size in GiB for custom disk offerings."]
        size, set_size, with_size, reset_size: i64 = "size",
        #[doc = "Zone to create the file system in."]
        zone_id, set_zone_id, with_zone_id, reset_zone_id: String = "zoneid",
    }
}

impl CreateSharedFileSystem {
    /// Create parameters with all required fields.
    pub fn new<N, Z, D, S, W>(
        name: N,
        zone_id: Z,
        disk_offering_id: D,
        service_offering_id: S,
        network_id: W,
        file_system: FileSystemType,
    ) -> CreateSharedFileSystem
    where
        N: Into<String>,
        Z: Into<String>,
        D: Into<String>,
        S: Into<String>,
        W: Into<String>,
    {
        CreateSharedFileSystem::default()
            .with_name(name)
            .with_zone_id(zone_id)
            .with_disk_offering_id(disk_offering_id)
            .with_service_offering_id(service_offering_id)
            .with_network_id(network_id)
            .with_file_system(file_system)
    }
}

api_command!(
    CreateSharedFileSystem => SharedFileSystem,
    "createSharedFileSystem",
    asynchronous = true,
    nested = "sharedfilesystem",
);

command_params! {
    #[doc = "Parameters of `listSharedFileSystems`."]
    ListSharedFileSystems {
        #[doc = "Owner account."]
        account, set_account, with_account, reset_account: String = "account",
        #[doc = "Disk offering of the data volume."]
        disk_offering_id, set_disk_offering_id, with_disk_offering_id,
            reset_disk_offering_id: String = "diskofferingid",
        #[doc = "Domain of the owner."]
        domain_id, set_domain_id, with_domain_id, reset_domain_id: String = "domainid",
        #[doc = "ID of the file system."]
        id, set_id, with_id, reset_id: String = "id",
        #[doc = "Include subdomains."]
        is_recursive, set_is_recursive, with_is_recursive, reset_is_recursive: bool = "isrecursive",
        #[doc = "List resources of all accounts the caller may see."]
        list_all, set_list_all, with_list_all, reset_list_all: bool = "listall",
        #[doc = "Name of the file system."]
        name, set_name, with_name, reset_name: String = "name",
        #[doc = "Network of the storage VM."]
        network_id, set_network_id, with_network_id, reset_network_id: String = "networkid",
        #[doc = "Owner project."]
        project_id, set_project_id, with_project_id, reset_project_id: String = "projectid",
        #[doc = "Service offering of the storage VM."]
        service_offering_id, set_service_offering_id, with_service_offering_id,
            reset_service_offering_id: String = "serviceofferingid",
        #[doc = "Zone of the file system."]
        zone_id, set_zone_id, with_zone_id, reset_zone_id: String = "zoneid",
    }
}

impl ListSharedFileSystems {
    /// List all file systems.
    pub fn new() -> ListSharedFileSystems {
        ListSharedFileSystems::default()
    }
}

list_command!(ListSharedFileSystems => SharedFileSystemList, "listSharedFileSystems");

command_params! {
    #[doc = "Parameters of `updateSharedFileSystem`."]
    UpdateSharedFileSystem {
        #[doc = "New description."]
        description, set_description, with_description, reset_description: String = "description",
        #[doc = "ID of the file system."]
        id, set_id, with_id, reset_id: String = "id",
        #[doc = "New name."]
        name, set_name, with_name, reset_name: String = "name",
    }
}

impl UpdateSharedFileSystem {
    /// Update the file system with the given ID.
    pub fn new<S: Into<String>>(id: S) -> UpdateSharedFileSystem {
        UpdateSharedFileSystem::default().with_id(id)
    }
}

api_command!(
    UpdateSharedFileSystem => SharedFileSystem,
    "updateSharedFileSystem",
    nested = "sharedfilesystem",
);

command_params! {
    #[doc = "Parameters of `startSharedFileSystem`."]
    StartSharedFileSystem {
        #[doc = "ID of the file system."]
        id, set_id, with_id, reset_id: String = "id",
    }
}

impl StartSharedFileSystem {
    /// Start the file system with the given ID.
    pub fn new<S: Into<String>>(id: S) -> StartSharedFileSystem {
        StartSharedFileSystem::default().with_id(id)
    }
}

api_command!(
    StartSharedFileSystem => SharedFileSystem,
    "startSharedFileSystem",
    asynchronous = true,
    nested = "sharedfilesystem",
);

command_params! {
    #[doc = "Parameters of `stopSharedFileSystem`."]
    StopSharedFileSystem {
        #[doc = "Force stop the storage VM."]
        forced, set_forced, with_forced, reset_forced: bool = "forced",
        #[doc = "ID of the file system."]
        id, set_id, with_id, reset_id: String = "id",
    }
}

impl StopSharedFileSystem {
    /// Stop the file system with the given ID.
    pub fn new<S: Into<String>>(id: S) -> StopSharedFileSystem {
        StopSharedFileSystem::default().with_id(id)
    }
}

api_command!(
    StopSharedFileSystem => SharedFileSystem,
    "stopSharedFileSystem",
    asynchronous = true,
    nested = "sharedfilesystem",
);

command_params! {
    #[doc = "Parameters of `destroySharedFileSystem`."]
    DestroySharedFileSystem {
        #[doc = "Expunge immediately instead of keeping it recoverable."]
        expunge, set_expunge, with_expunge, reset_expunge: bool = "expunge",
        #[doc = "Destroy even if the storage VM is running."]
        forced, set_forced, with_forced, reset_forced: bool = "forced",
        #[doc = "ID of the file system."]
        id, set_id, with_id, reset_id: String = "id",
    }
}

impl DestroySharedFileSystem {
    /// Destroy the file system with the given ID.
    pub fn new<S: Into<String>>(id: S) -> DestroySharedFileSystem {
        DestroySharedFileSystem::default().with_id(id)
    }
}

api_command!(
    DestroySharedFileSystem => SuccessResponse,
    "destroySharedFileSystem",
    asynchronous = true,
);

command_params! {
    #[doc = "Parameters of `listSharedFileSystemProviders`."]
    ListSharedFileSystemProviders {}
}

impl ListSharedFileSystemProviders {
    /// List all providers.
    pub fn new() -> ListSharedFileSystemProviders {
        ListSharedFileSystemProviders::default()
    }
}

list_command!(
    ListSharedFileSystemProviders => SharedFileSystemProviderList,
    "listSharedFileSystemProviders"
);
