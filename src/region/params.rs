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

//! Parameters of the region commands.

use super::super::common::SuccessResponse;
use super::protocol::{Region, RegionList};

command_params! {
    #[doc = "Parameters of `addRegion`."]
    AddRegion {
        #[doc = "Endpoint of the region's management server."]
        endpoint, set_endpoint, with_endpoint, reset_endpoint: String = "endpoint",
        #[doc = "ID of the region, must match the one in the region's database."]
        id, set_id, with_id, reset_id: i32 = "id",
        #[doc = "Name of the region."]
        name, set_name, with_name, reset_name: String = "name",
    }
}

impl AddRegion {
    /// Create parameters with all required fields.
    pub fn new<E, N>(endpoint: E, id: i32, name: N) -> AddRegion
    where
        E: Into<String>,
        N: Into<String>,
    {
        AddRegion::default()
            .with_endpoint(endpoint)
            .with_id(id)
            .with_name(name)
    }
}

api_command!(AddRegion => Region, "addRegion", nested = "region");

command_params! {
    #[doc = "Parameters of `listRegions`."]
    ListRegions {
        #[doc = "ID of the region."]
        id, set_id, with_id, reset_id: i32 = "id",
        #[doc = "Name of the region."]
        name, set_name, with_name, reset_name: String = "name",
    }
}

impl ListRegions {
    /// List all regions.
    pub fn new() -> ListRegions {
        ListRegions::default()
    }
}

list_command!(ListRegions => RegionList, "listRegions");

command_params! {
    #[doc = "Parameters of `updateRegion`."]
    UpdateRegion {
        #[doc = "New endpoint of the region."]
        endpoint, set_endpoint, with_endpoint, reset_endpoint: String = "endpoint",
        #[doc = "ID of the region to update."]
        id, set_id, with_id, reset_id: i32 = "id",
        #[doc = "New name of the region."]
        name, set_name, with_name, reset_name: String = "name",
    }
}

impl UpdateRegion {
    /// Update the region with the given ID.
    pub fn new(id: i32) -> UpdateRegion {
        UpdateRegion::default().with_id(id)
    }
}

api_command!(UpdateRegion => Region, "updateRegion", nested = "region");

command_params! {
    #[doc = "Parameters of `removeRegion`."]
    RemoveRegion {
        #[doc = "ID of the region to remove."]
        id, set_id, with_id, reset_id: i32 = "id",
    }
}

impl RemoveRegion {
    /// Remove the region with the given ID.
    pub fn new(id: i32) -> RemoveRegion {
        RemoveRegion::default().with_id(id)
    }
}

api_command!(RemoveRegion => SuccessResponse, "removeRegion");
