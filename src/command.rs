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

//! Generic command traits.

use std::fmt::Debug;

use serde::de::DeserializeOwned;

use super::params::ParameterBag;
use super::transport::RequestMethod;

/// A CloudStack API command together with its parameters.
///
/// Implementations are generated for every parameter structure in the
/// service modules. The associated constants describe how the command is
/// sent and how its response is unwrapped.
pub trait Command: Debug + Send + Sync {
    /// Structure the response is decoded into.
    type Response: DeserializeOwned + Send + 'static;

    /// Command name as sent in the `command` parameter.
    const NAME: &'static str;

    /// HTTP method to use.
    const METHOD: RequestMethod = RequestMethod::Get;

    /// Whether the command returns a job ID to wait for.
    const ASYNC: bool = false;

    /// Key the entity is nested under inside the envelope, if any.
    const NESTED: Option<&'static str> = None;

    /// Parameters of this invocation.
    fn params(&self) -> &ParameterBag;
}

/// A list command that supports paging.
pub trait ListCommand: Command + Clone {
    /// Request the given page.
    fn set_paging(&mut self, page: i32, page_size: i32);
}

/// A response of a list command.
pub trait ListResponse {
    /// Type of a single item.
    type Item;

    /// Total number of items reported by the server.
    fn count(&self) -> usize;

    /// Items of this page.
    fn into_items(self) -> Vec<Self::Item>;
}
