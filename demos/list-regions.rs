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

use futures::TryStreamExt;

use cloudstack::region::ListRegions;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let cs = cloudstack::Client::from_env()
        .expect("Failed to create a client from the environment");

    let regions: Vec<_> = cs
        .region()
        .list_regions_stream(ListRegions::new())
        .try_collect()
        .await
        .expect("Cannot list regions");
    for region in regions {
        println!(
            "ID = {}, Name = {}, Endpoint = {}",
            region.id, region.name, region.endpoint
        );
    }
}
