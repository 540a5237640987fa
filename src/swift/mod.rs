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

//! Swift secondary storage.
//!
//! Swift stores are regular image stores, so both commands return
//! [ImageStore](struct.ImageStore.html) records.

mod api;
mod params;
mod protocol;

pub use self::api::SwiftService;
pub use self::params::{AddSwift, ListSwifts};
pub use self::protocol::{ImageStore, ImageStoreList};
