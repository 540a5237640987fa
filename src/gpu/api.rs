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

//! GPU commands.

use futures::stream::Stream;

use super::super::common::{one_by_id, one_by_name, SuccessResponse};
use super::super::session::Session;
use super::super::Result;
use super::params::{
    CreateGpuCard, DeleteGpuCard, ListGpuCards, ListGpuDevices, ListVgpuProfiles,
};
use super::protocol::{GpuCard, GpuCardList, GpuDevice, GpuDeviceList, VgpuProfileList};

/// Commands of the GPU API.
#[derive(Debug, Clone)]
pub struct GpuService {
    session: Session,
}

impl GpuService {
    pub(crate) fn new(session: Session) -> GpuService {
        GpuService { session }
    }

    /// Register a GPU card model.
    pub async fn create_gpu_card(&self, params: &CreateGpuCard) -> Result<GpuCard> {
        trace!("Creating GPU card {:?}", params);
        self.session.execute(params).await
    }

    /// List GPU cards.
    pub async fn list_gpu_cards(&self, params: &ListGpuCards) -> Result<GpuCardList> {
        self.session.execute(params).await
    }

    /// Delete a GPU card model.
    pub async fn delete_gpu_card(&self, params: &DeleteGpuCard) -> Result<SuccessResponse> {
        trace!("Deleting GPU card {:?}", params);
        self.session.execute(params).await
    }

    /// List vGPU profiles.
    pub async fn list_vgpu_profiles(&self, params: &ListVgpuProfiles) -> Result<VgpuProfileList> {
        self.session.execute(params).await
    }

    /// List GPU devices.
    pub async fn list_gpu_devices(&self, params: &ListGpuDevices) -> Result<GpuDeviceList> {
        self.session.execute(params).await
    }

    /// Stream GPU devices across all pages.
    pub fn list_gpu_devices_stream(
        &self,
        params: ListGpuDevices,
    ) -> impl Stream<Item = Result<GpuDevice>> + Send + 'static {
        self.session.list_all(params)
    }

    /// Find a GPU card by its exact name.
    pub async fn get_gpu_card_by_name<S: AsRef<str>>(&self, name: S) -> Result<GpuCard> {
        let name = name.as_ref();
        let list = self
            .list_gpu_cards(&ListGpuCards::new().with_name(name))
            .await?;
        one_by_name(name, list.gpu_cards)
    }

    /// Find a GPU card by its ID.
    pub async fn get_gpu_card_by_id<S: AsRef<str>>(&self, id: S) -> Result<GpuCard> {
        let id = id.as_ref();
        let list = self.list_gpu_cards(&ListGpuCards::new().with_id(id)).await?;
        one_by_id(id, list.gpu_cards)
    }
}

#[cfg(test)]
pub mod test {
    use std::sync::Arc;

    use futures::TryStreamExt;
    use serde_json::json;

    use super::GpuService;
    use crate::gpu::{CreateGpuCard, ListGpuDevices};
    use crate::session::test::new_session;
    use crate::transport::fake::FakeTransport;

    #[tokio::test]
    async fn test_create_gpu_card() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply(
            "createGpuCard",
            json!({"gpucard": {
                "id": "c1",
                "name": "Tesla T4",
                "deviceid": "1eb8",
                "devicename": "TU104GL [Tesla T4]",
                "vendorid": "10de",
                "vendorname": "NVIDIA Corporation"
            }}),
        );
        let service = GpuService::new(new_session(transport.clone()));

        let params = CreateGpuCard::new(
            "Tesla T4",
            "1eb8",
            "TU104GL [Tesla T4]",
            "10de",
            "NVIDIA Corporation",
        )
        .with_video_ram(16384i64);
        let card = service.create_gpu_card(&params).await.unwrap();
        assert_eq!(card.vendor_id, "10de");
        assert_eq!(transport.requests()[0].param("videoram"), Some("16384"));
    }

    #[tokio::test]
    async fn test_devices_stream_pages() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply(
            "listGpuDevices",
            json!({"count": 3, "gpudevice": [
                {"id": "d1", "virtualmachineid": "vm1"},
                {"id": "d2"}
            ]}),
        );
        transport.reply(
            "listGpuDevices",
            json!({"count": 3, "gpudevice": [{"id": "d3"}]}),
        );
        let service = GpuService::new(new_session(transport.clone()));

        let devices: Vec<_> = service
            .list_gpu_devices_stream(ListGpuDevices::new().with_page_size(2))
            .try_collect()
            .await
            .unwrap();
        assert_eq!(devices.len(), 3);
        assert!(devices[0].is_allocated());
        assert!(!devices[2].is_allocated());
        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].param("page"), Some("2"));
    }

    #[tokio::test]
    async fn test_card_lookup_by_id() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply(
            "listGpuCards",
            json!({"count": 1, "gpucard": [{"id": "c1", "name": "Tesla T4"}]}),
        );
        let service = GpuService::new(new_session(transport));

        let card = service.get_gpu_card_by_id("c1").await.unwrap();
        assert_eq!(card.name, "Tesla T4");
    }
}
