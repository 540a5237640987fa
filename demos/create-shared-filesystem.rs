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
use std::time::Duration;

use cloudstack::shared_filesystem::{CreateSharedFileSystem, FileSystemType};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let cs = cloudstack::Client::from_env()
        .expect("Failed to create a client from the environment")
        .with_async_timeout(Duration::from_secs(900));

    let mut args = env::args().skip(1);
    let name = args.next().expect("Provide a name");
    let zone = args.next().expect("Provide a zone ID");
    let disk_offering = args.next().expect("Provide a disk offering ID");
    let service_offering = args.next().expect("Provide a service offering ID");
    let network = args.next().expect("Provide a network ID");

    let params = CreateSharedFileSystem::new(
        name,
        zone,
        disk_offering,
        service_offering,
        network,
        FileSystemType::Xfs,
    );
    let fs = cs
        .shared_filesystem()
        .create_shared_file_system(&params)
        .await
        .expect("Cannot create a shared file system");
    println!(
        "ID = {}, Name = {}, State = {:?}, Path = {:?}",
        fs.id, fs.name, fs.state, fs.path
    );
}
