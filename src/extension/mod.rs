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

//! Extensions and their custom actions.
//!
//! An extension is an external orchestrator script registered with the
//! management server. Its custom actions run against the resources the
//! extension is registered for.

mod api;
mod params;
mod protocol;

pub use self::api::ExtensionService;
pub use self::params::{
    CreateExtension, DeleteExtension, ListCustomActions, ListExtensions, RegisterExtension,
    RunCustomAction, UpdateExtension,
};
pub use self::protocol::{
    CustomAction, CustomActionList, CustomActionParameter, CustomActionResult, Extension,
    ExtensionList, ExtensionResource, ExtensionState, ExtensionType,
};
