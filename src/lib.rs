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

//! Apache CloudStack API client in Rust.
//!
//! The goal of this project is to provide a simple API for working with
//! CloudStack clouds: typed parameters for every command, request signing,
//! response decoding and transparent waiting for asynchronous jobs.
//!
//! # Usage
//!
//! ```rust,no_run
//! # async fn regions() -> cloudstack::Result<()> {
//! use cloudstack::region::ListRegions;
//!
//! let cs = cloudstack::Client::new(
//!     "https://cloud.example.com/client/api",
//!     "api-key",
//!     "secret-key",
//!     true,
//! )?;
//! let regions = cs.region().list_regions(&ListRegions::new()).await?;
//! for region in regions.regions {
//!     println!("{} {}", region.id, region.name);
//! }
//! # Ok(()) }
//! ```
//!
//! # Features
//!
//! Each service is behind a feature of the same name, all enabled by
//! default:
//!
//! * [annotation](annotation/index.html)
//! * [certificate](certificate/index.html)
//! * [extension](extension/index.html)
//! * [gpu](gpu/index.html)
//! * [guest-os](guest_os/index.html)
//! * [region](region/index.html)
//! * [shared-filesystem](shared_filesystem/index.html)
//! * [storage-pool](storage_pool/index.html)
//! * [swift](swift/index.html)
//!
//! The [asynchronous job API](asyncjob/index.html) is always available.
//! A blocking facade lives in the [sync](sync/index.html) module.

#![crate_name = "cloudstack"]
#![crate_type = "lib"]
#![doc(html_root_url = "https://docs.rs/cloudstack/0.1.0")]
// NOTE: we do not use generic deny(warnings) to avoid breakages with new
// versions of the compiler. Add more warnings here as you discover them.
#![deny(unsafe_code)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    trivial_numeric_casts,
    unconditional_recursion,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    while_true
)]

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

#[cfg(feature = "annotation")]
pub mod annotation;
pub mod asyncjob;
#[cfg(feature = "certificate")]
pub mod certificate;
mod client;
pub mod command;
pub mod common;
mod config;
mod envelope;
mod error;
#[cfg(feature = "extension")]
pub mod extension;
#[cfg(feature = "gpu")]
pub mod gpu;
#[cfg(feature = "guest-os")]
pub mod guest_os;
pub mod params;
mod quirks;
#[cfg(feature = "region")]
pub mod region;
mod session;
#[cfg(feature = "shared-filesystem")]
pub mod shared_filesystem;
pub mod signer;
#[cfg(feature = "storage-pool")]
pub mod storage_pool;
#[cfg(feature = "swift")]
pub mod swift;
pub mod sync;
pub mod transport;

pub use crate::client::Client;
pub use crate::command::{Command, ListCommand, ListResponse};
pub use crate::config::CloudConfig;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::params::{IndexedMap, KeyValueMap, ParamType, ParamValue, ParameterBag};
pub use crate::session::{
    Session, DEFAULT_ASYNC_TIMEOUT, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_TIMEOUT,
};
pub use crate::transport::{ApiRequest, HttpTransport, RawResponse, RequestMethod, Transport};
