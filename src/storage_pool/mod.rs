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

//! Primary storage pools.
//!
//! Only existing pools are managed here: pools are created by the
//! infrastructure setup, not through this API.

mod api;
mod params;
mod protocol;

pub use self::api::StoragePoolService;
pub use self::params::{
    CancelStorageMaintenance, DeleteStoragePool, EnableStorageMaintenance, ListStoragePools,
    ListStorageProviders, UpdateStoragePool,
};
pub use self::protocol::{
    StoragePool, StoragePoolList, StorageProvider, StorageProviderList, StorageProviderType,
};
