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

//! Storage pool commands.

use futures::stream::Stream;

use super::super::common::{one_by_id, one_by_name, SuccessResponse};
use super::super::session::Session;
use super::super::Result;
use super::params::{
    CancelStorageMaintenance, DeleteStoragePool, EnableStorageMaintenance, ListStoragePools,
    ListStorageProviders, UpdateStoragePool,
};
use super::protocol::{StoragePool, StoragePoolList, StorageProviderList};

/// Commands of the storage pool API.
#[derive(Debug, Clone)]
pub struct StoragePoolService {
    session: Session,
}

impl StoragePoolService {
    pub(crate) fn new(session: Session) -> StoragePoolService {
        StoragePoolService { session }
    }

    /// List storage pools.
    pub async fn list_storage_pools(&self, params: &ListStoragePools) -> Result<StoragePoolList> {
        self.session.execute(params).await
    }

    /// Stream storage pools across all pages.
    pub fn list_storage_pools_stream(
        &self,
        params: ListStoragePools,
    ) -> impl Stream<Item = Result<StoragePool>> + Send + 'static {
        self.session.list_all(params)
    }

    /// Update a storage pool.
    pub async fn update_storage_pool(&self, params: &UpdateStoragePool) -> Result<StoragePool> {
        trace!("Updating storage pool {:?}", params);
        self.session.execute(params).await
    }

    /// Delete a storage pool.
    pub async fn delete_storage_pool(&self, params: &DeleteStoragePool) -> Result<SuccessResponse> {
        trace!("Deleting storage pool {:?}", params);
        self.session.execute(params).await
    }

    /// Put a storage pool into maintenance.
    pub async fn enable_storage_maintenance(
        &self,
        params: &EnableStorageMaintenance,
    ) -> Result<StoragePool> {
        trace!("Enabling maintenance for storage pool {:?}", params);
        let pool: StoragePool = self.session.execute(params).await?;
        debug!("Storage pool {} is now {:?}", pool.id, pool.state);
        Ok(pool)
    }

    /// Take a storage pool out of maintenance.
    pub async fn cancel_storage_maintenance(
        &self,
        params: &CancelStorageMaintenance,
    ) -> Result<StoragePool> {
        trace!("Cancelling maintenance for storage pool {:?}", params);
        let pool: StoragePool = self.session.execute(params).await?;
        debug!("Storage pool {} is now {:?}", pool.id, pool.state);
        Ok(pool)
    }

    /// List storage providers.
    pub async fn list_storage_providers(
        &self,
        params: &ListStorageProviders,
    ) -> Result<StorageProviderList> {
        self.session.execute(params).await
    }

    /// Find a storage pool by its exact name.
    pub async fn get_storage_pool_by_name<S: AsRef<str>>(&self, name: S) -> Result<StoragePool> {
        let name = name.as_ref();
        let list = self
            .list_storage_pools(&ListStoragePools::new().with_name(name))
            .await?;
        one_by_name(name, list.storage_pools)
    }

    /// Find a storage pool by its ID.
    pub async fn get_storage_pool_by_id<S: AsRef<str>>(&self, id: S) -> Result<StoragePool> {
        let id = id.as_ref();
        let list = self
            .list_storage_pools(&ListStoragePools::new().with_id(id))
            .await?;
        one_by_id(id, list.storage_pools)
    }
}
