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

//! Swift commands.

use futures::stream::Stream;

use super::super::session::Session;
use super::super::Result;
use super::params::{AddSwift, ListSwifts};
use super::protocol::{ImageStore, ImageStoreList};

/// Commands of the Swift API.
#[derive(Debug, Clone)]
pub struct SwiftService {
    session: Session,
}

impl SwiftService {
    pub(crate) fn new(session: Session) -> SwiftService {
        SwiftService { session }
    }

    /// Add a Swift store.
    pub async fn add_swift(&self, params: &AddSwift) -> Result<ImageStore> {
        // Do not log the parameters, they contain the Swift key.
        debug!("Adding Swift store at {:?}", params.url());
        self.session.execute(params).await
    }

    /// List Swift stores.
    pub async fn list_swifts(&self, params: &ListSwifts) -> Result<ImageStoreList> {
        self.session.execute(params).await
    }

    /// Stream Swift stores across all pages.
    pub fn list_swifts_stream(
        &self,
        params: ListSwifts,
    ) -> impl Stream<Item = Result<ImageStore>> + Send + 'static {
        self.session.list_all(params)
    }
}

#[cfg(test)]
pub mod test {
    use std::sync::Arc;

    use serde_json::json;

    use super::SwiftService;
    use crate::session::test::new_session;
    use crate::swift::{AddSwift, ListSwifts};
    use crate::transport::fake::FakeTransport;

    #[tokio::test]
    async fn test_add_swift() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply(
            "addSwift",
            json!({"imagestore": {
                "id": "s1",
                "name": "swift",
                "url": "http://swift.example.com:8080/auth/v1.0",
                "providername": "Swift",
                "scope": "REGION"
            }}),
        );
        let service = SwiftService::new(new_session(transport.clone()));

        let store = service
            .add_swift(
                &AddSwift::new("http://swift.example.com:8080/auth/v1.0")
                    .with_account("acct")
                    .with_username("user")
                    .with_key("s3cr3t"),
            )
            .await
            .unwrap();
        assert_eq!(store.provider_name.as_deref(), Some("Swift"));
        assert_eq!(transport.requests()[0].param("key"), Some("s3cr3t"));
    }

    #[tokio::test]
    async fn test_list_by_id() {
        let transport = Arc::new(FakeTransport::new());
        transport.reply(
            "listSwifts",
            json!({"count": 1, "imagestore": [{"id": "s1", "name": "swift", "url": "http://x/"}]}),
        );
        let service = SwiftService::new(new_session(transport.clone()));

        let list = service
            .list_swifts(&ListSwifts::new().with_id(5i64))
            .await
            .unwrap();
        assert_eq!(list.count, 1);
        assert_eq!(list.image_stores[0].id, "s1");
        assert_eq!(transport.requests()[0].param("id"), Some("5"));
    }
}
