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

//! Region commands.

use futures::stream::Stream;

use super::super::common::{one_by_id, one_by_name, SuccessResponse};
use super::super::session::Session;
use super::super::Result;
use super::params::{AddRegion, ListRegions, RemoveRegion, UpdateRegion};
use super::protocol::{Region, RegionList};

/// Commands of the region API.
#[derive(Debug, Clone)]
pub struct RegionService {
    session: Session,
}

impl RegionService {
    pub(crate) fn new(session: Session) -> RegionService {
        RegionService { session }
    }

    /// Register a region.
    pub async fn add_region(&self, params: &AddRegion) -> Result<Region> {
        trace!("Adding region {:?}", params);
        let region = self.session.execute(params).await?;
        debug!("Added region {:?}", region);
        Ok(region)
    }

    /// List regions.
    pub async fn list_regions(&self, params: &ListRegions) -> Result<RegionList> {
        self.session.execute(params).await
    }

    /// Stream regions across all pages.
    pub fn list_regions_stream(
        &self,
        params: ListRegions,
    ) -> impl Stream<Item = Result<Region>> + Send + 'static {
        self.session.list_all(params)
    }

    /// Update a region.
    pub async fn update_region(&self, params: &UpdateRegion) -> Result<Region> {
        trace!("Updating region {:?}", params);
        self.session.execute(params).await
    }

    /// Remove a region.
    pub async fn remove_region(&self, params: &RemoveRegion) -> Result<SuccessResponse> {
        trace!("Removing region {:?}", params);
        self.session.execute(params).await
    }

    /// Find a region by its exact name.
    pub async fn get_region_by_name<S: AsRef<str>>(&self, name: S) -> Result<Region> {
        let name = name.as_ref();
        let list = self
            .list_regions(&ListRegions::new().with_name(name))
            .await?;
        one_by_name(name, list.regions)
    }

    /// Find a region by its ID.
    pub async fn get_region_by_id(&self, id: i32) -> Result<Region> {
        let list = self.list_regions(&ListRegions::new().with_id(id)).await?;
        one_by_id(&id.to_string(), list.regions)
    }
}
