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

//! Guest OS commands.

use futures::stream::Stream;

use super::super::common::{one_by_id, one_by_name, SuccessResponse};
use super::super::session::Session;
use super::super::Result;
use super::params::{
    AddGuestOs, AddGuestOsMapping, ListGuestOsMapping, ListOsCategories, ListOsTypes,
    RemoveGuestOs, RemoveGuestOsMapping, UpdateGuestOs,
};
use super::protocol::{
    GuestOsMapping, GuestOsMappingList, OsCategory, OsCategoryList, OsType, OsTypeList,
};

/// Commands of the guest OS API.
#[derive(Debug, Clone)]
pub struct GuestOsService {
    session: Session,
}

impl GuestOsService {
    pub(crate) fn new(session: Session) -> GuestOsService {
        GuestOsService { session }
    }

    /// List OS types.
    pub async fn list_os_types(&self, params: &ListOsTypes) -> Result<OsTypeList> {
        self.session.execute(params).await
    }

    /// Stream OS types across all pages.
    pub fn list_os_types_stream(
        &self,
        params: ListOsTypes,
    ) -> impl Stream<Item = Result<OsType>> + Send + 'static {
        self.session.list_all(params)
    }

    /// List OS categories.
    pub async fn list_os_categories(&self, params: &ListOsCategories) -> Result<OsCategoryList> {
        self.session.execute(params).await
    }

    /// Add a user defined OS.
    pub async fn add_guest_os(&self, params: &AddGuestOs) -> Result<OsType> {
        trace!("Adding guest OS {:?}", params);
        self.session.execute(params).await
    }

    /// Update a user defined OS.
    pub async fn update_guest_os(&self, params: &UpdateGuestOs) -> Result<OsType> {
        trace!("Updating guest OS {:?}", params);
        self.session.execute(params).await
    }

    /// Remove a user defined OS.
    pub async fn remove_guest_os(&self, params: &RemoveGuestOs) -> Result<SuccessResponse> {
        trace!("Removing guest OS {:?}", params);
        self.session.execute(params).await
    }

    /// List hypervisor mappings.
    pub async fn list_guest_os_mapping(
        &self,
        params: &ListGuestOsMapping,
    ) -> Result<GuestOsMappingList> {
        self.session.execute(params).await
    }

    /// Add a hypervisor mapping.
    pub async fn add_guest_os_mapping(&self, params: &AddGuestOsMapping) -> Result<GuestOsMapping> {
        trace!("Adding guest OS mapping {:?}", params);
        self.session.execute(params).await
    }

    /// Remove a hypervisor mapping.
    pub async fn remove_guest_os_mapping(
        &self,
        params: &RemoveGuestOsMapping,
    ) -> Result<SuccessResponse> {
        trace!("Removing guest OS mapping {:?}", params);
        self.session.execute(params).await
    }

    /// Find an OS type by its ID.
    pub async fn get_os_type_by_id<S: AsRef<str>>(&self, id: S) -> Result<OsType> {
        let id = id.as_ref();
        let list = self.list_os_types(&ListOsTypes::new().with_id(id)).await?;
        one_by_id(id, list.os_types)
    }

    /// Find an OS category by its exact name.
    pub async fn get_os_category_by_name<S: AsRef<str>>(&self, name: S) -> Result<OsCategory> {
        let name = name.as_ref();
        let list = self
            .list_os_categories(&ListOsCategories::new().with_name(name))
            .await?;
        one_by_name(name, list.os_categories)
    }

    /// Find an OS category by its ID.
    pub async fn get_os_category_by_id<S: AsRef<str>>(&self, id: S) -> Result<OsCategory> {
        let id = id.as_ref();
        let list = self
            .list_os_categories(&ListOsCategories::new().with_id(id))
            .await?;
        one_by_id(id, list.os_categories)
    }
}
