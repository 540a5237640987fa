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

use std::env;

use cloudstack::storage_pool::ListStoragePools;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let cs = cloudstack::Client::from_env()
        .expect("Failed to create a client from the environment");

    let mut params = ListStoragePools::new();
    if let Some(zone) = env::args().nth(1) {
        params.set_zone_id(zone);
    }

    let pools = cs
        .storage_pool()
        .list_storage_pools(&params)
        .await
        .expect("Cannot list storage pools");
    for pool in pools.storage_pools {
        println!(
            "ID = {}, Name = {}, State = {:?}, Used = {}/{}",
            pool.id, pool.name, pool.state, pool.disk_size_used, pool.disk_size_total
        );
    }
}
