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

//! Shared file system commands.

use futures::stream::Stream;

use super::super::common::{one_by_id, one_by_name, SuccessResponse};
use super::super::session::Session;
use super::super::Result;
use super::params::{
    CreateSharedFileSystem, DestroySharedFileSystem, ListSharedFileSystemProviders,
    ListSharedFileSystems, StartSharedFileSystem, StopSharedFileSystem, UpdateSharedFileSystem,
};
use super::protocol::{SharedFileSystem, SharedFileSystemList, SharedFileSystemProviderList};

/// Commands of the shared file system API.
#[derive(Debug, Clone)]
pub struct SharedFileSystemService {
    session: Session,
}

impl SharedFileSystemService {
    pub(crate) fn new(session: Session) -> SharedFileSystemService {
        SharedFileSystemService { session }
    }

    /// Create a shared file system.
    ///
    /// In asynchronous mode this waits until the storage VM is deployed.
    pub async fn create_shared_file_system(
        &self,
        params: &CreateSharedFileSystem,
    ) -> Result<SharedFileSystem> {
        trace!("Creating shared file system {:?}", params);
        let fs: SharedFileSystem = self.session.execute(params).await?;
        debug!("Created shared file system {} ({})", fs.name, fs.id);
        Ok(fs)
    }

    /// List shared file systems.
    pub async fn list_shared_file_systems(
        &self,
        params: &ListSharedFileSystems,
    ) -> Result<SharedFileSystemList> {
        self.session.execute(params).await
    }

    /// Stream shared file systems across all pages.
    pub fn list_shared_file_systems_stream(
        &self,
        params: ListSharedFileSystems,
    ) -> impl Stream<Item = Result<SharedFileSystem>> + Send + 'static {
        self.session.list_all(params)
    }

    /// Update the name or description of a shared file system.
    pub async fn update_shared_file_system(
        &self,
        params: &UpdateSharedFileSystem,
    ) -> Result<SharedFileSystem> {
        trace!("Updating shared file system {:?}", params);
        self.session.execute(params).await
    }

    /// Start a shared file system.
    pub async fn start_shared_file_system(
        &self,
        params: &StartSharedFileSystem,
    ) -> Result<SharedFileSystem> {
        trace!("Starting shared file system {:?}", params);
        self.session.execute(params).await
    }

    /// Stop a shared file system.
    pub async fn stop_shared_file_system(
        &self,
        params: &StopSharedFileSystem,
    ) -> Result<SharedFileSystem> {
        trace!("Stopping shared file system {:?}", params);
        self.session.execute(params).await
    }

    /// Destroy a shared file system.
    pub async fn destroy_shared_file_system(
        &self,
        params: &DestroySharedFileSystem,
    ) -> Result<SuccessResponse> {
        trace!("Destroying shared file system {:?}", params);
        self.session.execute(params).await
    }

    /// List shared file system providers.
    pub async fn list_shared_file_system_providers(
        &self,
        params: &ListSharedFileSystemProviders,
    ) -> Result<SharedFileSystemProviderList> {
        self.session.execute(params).await
    }

    /// Find a shared file system by its exact name.
    pub async fn get_shared_file_system_by_name<S: AsRef<str>>(
        &self,
        name: S,
    ) -> Result<SharedFileSystem> {
        let name = name.as_ref();
        let list = self
            .list_shared_file_systems(&ListSharedFileSystems::new().with_name(name))
            .await?;
        one_by_name(name, list.file_systems)
    }

    /// Find a shared file system by its ID.
    pub async fn get_shared_file_system_by_id<S: AsRef<str>>(
        &self,
        id: S,
    ) -> Result<SharedFileSystem> {
        let id = id.as_ref();
        let list = self
            .list_shared_file_systems(&ListSharedFileSystems::new().with_id(id))
            .await?;
        one_by_id(id, list.file_systems)
    }
}

#[cfg(test)]
pub mod test {
    use std::sync::Arc;
    use std::time::Duration;

    use serde_json::json;

    use super::SharedFileSystemService;
    use crate::session::test::new_session;
    use crate::shared_filesystem::{
        CreateSharedFileSystem, DestroySharedFileSystem, FileSystemType,
        ListSharedFileSystemProviders, StopSharedFileSystem,
    };
    use crate::transport::fake::FakeTransport;
    use crate::ErrorKind;

    fn create_params() -> CreateSharedFileSystem {
        CreateSharedFileSystem::new("fs1", "z1", "d1", "s1", "n1", FileSystemType::Ext4)
    }

    #[tokio::test(start_paused = true)]
    async fn test_create() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply("createSharedFileSystem", json!({"id": "fs-1", "jobid": "j1"}));
        transport.reply("queryAsyncJobResult", json!({"jobid": "j1", "jobstatus": 0}));
        transport.reply("queryAsyncJobResult", json!({"jobid": "j1", "jobstatus": 0}));
        transport.reply(
            "queryAsyncJobResult",
            json!({"jobid": "j1", "jobstatus": 1, "jobresult": {"sharedfilesystem": {
                "id": "fs-1",
                "name": "fs1",
                "state": "Ready",
                "filesystem": "EXT4",
                "path": "/export"
            }}}),
        );
        let service = SharedFileSystemService::new(new_session(transport.clone()));

        let fs = service.create_shared_file_system(&create_params()).await.unwrap();
        assert_eq!(fs.state.as_deref(), Some("Ready"));
        assert_eq!(fs.file_system, Some(FileSystemType::Ext4));
        assert_eq!(transport.count("queryAsyncJobResult"), 3);
        assert_eq!(transport.requests()[0].param("filesystem"), Some("EXT4"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_timeout_keeps_job_id() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply("createSharedFileSystem", json!({"id": "fs-1", "jobid": "j1"}));
        transport.reply("queryAsyncJobResult", json!({"jobid": "j1", "jobstatus": 0}));
        let mut session = new_session(transport);
        session.set_async_timeout(Duration::from_secs(5));
        let service = SharedFileSystemService::new(session);

        let err = service
            .create_shared_file_system(&create_params())
            .await
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::OperationTimedOut);
        assert_eq!(err.job_id(), Some("j1"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_failed_job() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply("stopSharedFileSystem", json!({"jobid": "j2"}));
        transport.reply(
            "queryAsyncJobResult",
            json!({"jobid": "j2", "jobstatus": 2, "jobresultcode": 530, "jobresult": {
                "errorcode": 530,
                "errortext": "Storage VM is not running"
            }}),
        );
        let service = SharedFileSystemService::new(new_session(transport));

        let err = service
            .stop_shared_file_system(&StopSharedFileSystem::new("fs-1"))
            .await
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::OperationFailed);
        assert_eq!(err.message(), Some("Storage VM is not running"));
    }

    #[tokio::test]
    async fn test_destroy_without_waiting() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply("destroySharedFileSystem", json!({"jobid": "j3"}));
        let mut session = new_session(transport.clone());
        session.set_async(false);
        let service = SharedFileSystemService::new(session);

        let result = service
            .destroy_shared_file_system(&DestroySharedFileSystem::new("fs-1").with_expunge(true))
            .await
            .unwrap();
        assert_eq!(result.job_id.as_deref(), Some("j3"));
        assert_eq!(transport.count("queryAsyncJobResult"), 0);
    }

    #[tokio::test]
    async fn test_providers_and_lookup() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply(
            "listSharedFileSystemProviders",
            json!({"count": 1, "sharedfilesystemprovider": [{"name": "STORAGEFSVM"}]}),
        );
        transport.reply(
            "listSharedFileSystems",
            json!({"count": 1, "sharedfilesystem": [{"id": "fs-1", "name": "fs1"}]}),
        );
        let service = SharedFileSystemService::new(new_session(transport));

        let providers = service
            .list_shared_file_system_providers(&ListSharedFileSystemProviders::new())
            .await
            .unwrap();
        assert_eq!(providers.providers[0].name, "STORAGEFSVM");

        let fs = service.get_shared_file_system_by_id("fs-1").await.unwrap();
        assert_eq!(fs.name, "fs1");
    }
}
