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

//! Asynchronous job tracking.
//!
//! Long running commands return a job ID right away. The
//! [wait_for_job](../struct.Session.html#method.wait_for_job) poller queries
//! `queryAsyncJobResult` until the job finishes, and the session uses it
//! automatically for asynchronous commands when the client is in
//! asynchronous mode.

mod api;
mod params;
mod protocol;
mod waiter;

pub use self::api::AsyncJobService;
pub use self::params::{ListAsyncJobs, QueryAsyncJobResult};
pub use self::protocol::{AsyncJobList, AsyncJobResult, JobStatus};
pub use self::waiter::{PollPolicy, MIN_POLL_DELAY};
pub(crate) use self::waiter::wait_for_job;
