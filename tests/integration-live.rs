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

//! Read-only checks against a real cloud configured via `CLOUDSTACK_*`.
//!
//! Run with `cargo test -- --ignored`.

use std::sync::Once;

use futures::TryStreamExt;

use cloudstack::asyncjob::ListAsyncJobs;
use cloudstack::guest_os::ListOsTypes;
use cloudstack::region::ListRegions;

static INIT: Once = Once::new();

fn set_up() -> cloudstack::Client {
    INIT.call_once(|| {
        env_logger::init();
    });

    cloudstack::Client::from_env().expect("Failed to create a client from the environment")
}

#[tokio::test]
#[ignore]
async fn test_list_regions() {
    let cs = set_up();
    let regions = cs
        .region()
        .list_regions(&ListRegions::new())
        .await
        .expect("Cannot list regions");
    assert!(!regions.regions.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_list_os_types_stream() {
    let cs = set_up();
    let items: Vec<_> = cs
        .guest_os()
        .list_os_types_stream(ListOsTypes::new().with_page_size(50))
        .try_collect()
        .await
        .expect("Cannot list OS types");
    assert!(!items.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_list_async_jobs() {
    let cs = set_up();
    let _ = cs
        .async_job()
        .list_async_jobs(&ListAsyncJobs::new())
        .await
        .expect("Cannot list jobs");
}
